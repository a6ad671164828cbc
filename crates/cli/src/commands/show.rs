use std::sync::Arc;
use std::time::Duration;

use lounge_agent::{client_from_config, PairingService};
use lounge_core::config::AppConfig;
use lounge_core::{
    localized, localized_list, DetailMode, DetailView, Language, ListField, MenuItemId,
    PairingState, TextField,
};
use serde::Serialize;

use crate::commands::{
    load_catalog, resolve_language, to_data, CommandResult, EXIT_CONFIG, EXIT_INPUT,
};

#[derive(Debug, Serialize)]
struct ItemDetail<'a> {
    id: &'a str,
    name: &'a str,
    price: &'a str,
    lang: Language,
    mode: DetailMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    ingredients: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<&'a str>,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<&'a str>,
    pairing: Option<&'a PairingState>,
}

pub fn run(config: &AppConfig, id: &str, lang: Option<&str>, video: bool) -> CommandResult {
    let lang = match resolve_language("show", config, lang) {
        Ok(lang) => lang,
        Err(result) => return result,
    };
    let catalog = match load_catalog("show", config) {
        Ok(catalog) => Arc::new(catalog),
        Err(result) => return result,
    };

    let item_id = MenuItemId::new(id);
    let (item, tab) = match (catalog.find(&item_id), catalog.section_of(&item_id)) {
        (Some(item), Some(tab)) => (item.clone(), tab),
        _ => {
            return CommandResult::failure(
                "show",
                "unknown_item",
                format!("no menu item with id `{id}`"),
                EXIT_INPUT,
            )
        }
    };

    let mut view = DetailView::new();
    let mode = if video { DetailMode::Video } else { DetailMode::Info };
    if let Some(ticket) = view.open(item, tab, mode, lang) {
        let client = match client_from_config(&config.llm) {
            Ok(client) => client,
            Err(error) => {
                return CommandResult::failure("show", "llm_client", error.to_string(), EXIT_CONFIG)
            }
        };
        let service = PairingService::new(client, catalog.clone())
            .with_venue(config.menu.venue_name.clone())
            .with_timeout(Duration::from_secs(config.llm.timeout_secs));

        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                return CommandResult::failure(
                    "show",
                    "runtime",
                    format!("failed to initialize async runtime: {error}"),
                    1,
                )
            }
        };
        let outcome = runtime.block_on(service.fulfill(ticket));
        view.apply(outcome);
    }

    let Some(item) = view.current_item() else {
        return CommandResult::failure("show", "detail_view", "detail view is not open", 1);
    };
    let detail = ItemDetail {
        id: item.id.as_str(),
        name: item.display_name(lang),
        price: &item.price,
        lang,
        mode: view.mode().unwrap_or_default(),
        description: localized(item, TextField::Description, lang),
        ingredients: localized_list(item, ListField::Ingredients, lang),
        history: localized(item, TextField::History, lang),
        tags: localized_list(item, ListField::Tags, lang),
        image: item.image.as_deref(),
        video: item.video.as_deref(),
        pairing: view.pairing(),
    };

    CommandResult::success_with("show", format!("opened {}", detail.name), to_data(&detail))
}
