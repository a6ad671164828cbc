use lounge_core::config::AppConfig;
use lounge_core::{
    localized, localized_list, CocktailFilter, DomainError, Language, ListField, MenuItem,
    MenuTab, TextField,
};
use serde::Serialize;

use crate::commands::{load_catalog, resolve_language, to_data, CommandResult, EXIT_INPUT};

#[derive(Debug, Serialize)]
pub(crate) struct ItemSummary<'a> {
    id: &'a str,
    name: &'a str,
    price: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    tags: &'a [String],
    has_video: bool,
}

impl<'a> ItemSummary<'a> {
    pub(crate) fn new(item: &'a MenuItem, lang: Language) -> Self {
        Self {
            id: item.id.as_str(),
            name: item.display_name(lang),
            price: &item.price,
            description: localized(item, TextField::Description, lang),
            category: item.category.map(|category| category.label(lang)),
            tags: localized_list(item, ListField::Tags, lang),
            has_video: item.has_video(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DrinkGroup<'a> {
    name: &'a str,
    items: Vec<ItemSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct MenuListing<'a> {
    tab: MenuTab,
    label: &'static str,
    lang: Language,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<ItemSummary<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    drinks: Vec<DrinkGroup<'a>>,
}

pub fn run(config: &AppConfig, tab: &str, filter: &str, lang: Option<&str>) -> CommandResult {
    let lang = match resolve_language("menu", config, lang) {
        Ok(lang) => lang,
        Err(result) => return result,
    };
    let parsed = tab
        .parse::<MenuTab>()
        .and_then(|tab| filter.parse::<CocktailFilter>().map(|filter| (tab, filter)));
    let (tab, filter) = match parsed {
        Ok(parsed) => parsed,
        Err(error) => return invalid_argument(error),
    };
    let catalog = match load_catalog("menu", config) {
        Ok(catalog) => catalog,
        Err(result) => return result,
    };

    let mut listing =
        MenuListing { tab, label: tab.label(lang), lang, items: Vec::new(), drinks: Vec::new() };
    match tab {
        MenuTab::Cocktails => {
            listing.items = catalog
                .filter_cocktails(filter)
                .map(|item| ItemSummary::new(item, lang))
                .collect();
        }
        MenuTab::Snacks => {
            listing.items =
                catalog.snacks().iter().map(|item| ItemSummary::new(item, lang)).collect();
        }
        MenuTab::Drinks => {
            listing.drinks = catalog
                .drinks()
                .iter()
                .map(|category| DrinkGroup {
                    name: category.display_name(lang),
                    items: category.items.iter().map(|item| ItemSummary::new(item, lang)).collect(),
                })
                .collect();
        }
    }

    let count = listing.items.len() + listing.drinks.iter().map(|group| group.items.len()).sum::<usize>();
    CommandResult::success_with(
        "menu",
        format!("{count} item(s) in {}", listing.label),
        to_data(&listing),
    )
}

fn invalid_argument(error: DomainError) -> CommandResult {
    CommandResult::failure("menu", "invalid_argument", error.to_string(), EXIT_INPUT)
}
