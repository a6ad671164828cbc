use serde::Serialize;
use url::Url;

use crate::domain::menu::{Language, MenuItem};
use crate::selection::Selection;

const WHATSAPP_SHARE_URL: &str = "https://wa.me/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SharePayload {
    /// Link used when the host has no native share sheet.
    pub fn whatsapp_link(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(WHATSAPP_SHARE_URL, &[("text", self.text.as_str())])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareVenue {
    pub name: String,
    pub page_url: Option<String>,
}

pub fn share_item(item: &MenuItem, lang: Language, venue: &ShareVenue) -> SharePayload {
    let lead = match lang {
        Language::Es => format!("Mira lo que me voy a tomar en {}", venue.name),
        Language::En => format!("Look what I'm having at {}!", venue.name),
    };
    let text = format!(
        "{lead}\n\n*{name}*\n{price}\n\n📍 {venue}",
        name = item.display_name(lang),
        price = item.price,
        venue = venue.name
    );

    SharePayload { title: venue.name.clone(), text, url: venue.page_url.clone() }
}

pub fn share_selection(selection: &Selection, lang: Language, venue: &ShareVenue) -> SharePayload {
    let (title, lead) = match lang {
        Language::Es => (
            format!("Mi selección en {}", venue.name),
            format!("Esta es mi selección en {}:", venue.name),
        ),
        Language::En => (
            format!("My selection at {}", venue.name),
            format!("This is my selection at {}:", venue.name),
        ),
    };

    let lines = selection
        .entries()
        .iter()
        .map(|entry| format!("- {}x {}", entry.quantity(), entry.item().display_name(lang)))
        .collect::<Vec<_>>()
        .join("\n");
    let text = format!("{lead}\n\n{lines}\n\n📍 {}", venue.name);

    SharePayload { title, text, url: venue.page_url.clone() }
}
