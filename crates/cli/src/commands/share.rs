use lounge_core::config::AppConfig;
use lounge_core::{share_item, share_selection, MenuItemId, Selection, SharePayload};
use serde::Serialize;

use crate::commands::{load_catalog, resolve_language, to_data, CommandResult, EXIT_INPUT};

#[derive(Debug, Serialize)]
struct ShareOutput<'a> {
    #[serde(flatten)]
    payload: &'a SharePayload,
    whatsapp_link: Option<String>,
    total_count: u32,
}

pub fn run(config: &AppConfig, ids: &[String], single: bool, lang: Option<&str>) -> CommandResult {
    let lang = match resolve_language("share", config, lang) {
        Ok(lang) => lang,
        Err(result) => return result,
    };
    if single && ids.len() != 1 {
        return CommandResult::failure(
            "share",
            "invalid_argument",
            "--item shares exactly one item id",
            EXIT_INPUT,
        );
    }
    let catalog = match load_catalog("share", config) {
        Ok(catalog) => catalog,
        Err(result) => return result,
    };

    let mut selection = Selection::new();
    for id in ids {
        match catalog.find(&MenuItemId::new(id.as_str())) {
            Some(item) => {
                selection.add(item);
            }
            None => {
                return CommandResult::failure(
                    "share",
                    "unknown_item",
                    format!("no menu item with id `{id}`"),
                    EXIT_INPUT,
                )
            }
        }
    }

    let venue = config.menu.share_venue();
    let payload = match selection.entries().first() {
        Some(entry) if single => share_item(entry.item(), lang, &venue),
        _ => share_selection(&selection, lang, &venue),
    };
    let output = ShareOutput {
        payload: &payload,
        whatsapp_link: payload.whatsapp_link().ok().map(String::from),
        total_count: selection.total_count(),
    };

    CommandResult::success_with("share", payload.title.clone(), to_data(&output))
}
