use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Menu languages. Spanish is the base language every catalog entry must carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CocktailCategory {
    #[serde(rename = "CON ALCOHOL")]
    WithAlcohol,
    #[serde(rename = "SIN ALCOHOL")]
    AlcoholFree,
    #[serde(rename = "LOW ALCOHOL")]
    LowAlcohol,
}

impl CocktailCategory {
    pub const ALL: [Self; 3] = [Self::WithAlcohol, Self::LowAlcohol, Self::AlcoholFree];

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::WithAlcohol, Language::Es) => "Con Alcohol",
            (Self::WithAlcohol, Language::En) => "With Alcohol",
            (Self::AlcoholFree, Language::Es) => "Sin Alcohol",
            (Self::AlcoholFree, Language::En) => "Alcohol Free",
            (Self::LowAlcohol, _) => "Low Alcohol",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CocktailCategory>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListField {
    Ingredients,
    Tags,
}

/// Reads a text field in `lang`.
///
/// Spanish always reads the base field. English reads the `_en` variant and
/// falls back to the base field when the variant is missing or blank, so a
/// partially translated item never renders an empty value. Returns `None`
/// only when the base field itself is absent.
pub fn localized(item: &MenuItem, field: TextField, lang: Language) -> Option<&str> {
    let (base, translated) = match field {
        TextField::Name => (Some(item.name.as_str()), item.name_en.as_deref()),
        TextField::Description => (item.description.as_deref(), item.description_en.as_deref()),
        TextField::History => (item.history.as_deref(), item.history_en.as_deref()),
    };

    let base = base.filter(|value| !value.trim().is_empty());
    match lang {
        Language::Es => base,
        Language::En => translated.filter(|value| !value.trim().is_empty()).or(base),
    }
}

/// List counterpart of [`localized`]. Absent lists read as empty.
pub fn localized_list(item: &MenuItem, field: ListField, lang: Language) -> &[String] {
    let (base, translated) = match field {
        ListField::Ingredients => (item.ingredients.as_deref(), item.ingredients_en.as_deref()),
        ListField::Tags => (item.tags.as_deref(), item.tags_en.as_deref()),
    };

    let base = base.filter(|values| !values.is_empty());
    let chosen = match lang {
        Language::Es => base,
        Language::En => translated.filter(|values| !values.is_empty()).or(base),
    };
    chosen.unwrap_or(&[])
}

impl MenuItem {
    pub fn display_name(&self, lang: Language) -> &str {
        localized(self, TextField::Name, lang).unwrap_or(self.name.as_str())
    }

    /// Localized description, or the localized ingredient list when the item
    /// has no description.
    pub fn details(&self, lang: Language) -> Option<String> {
        if let Some(description) = localized(self, TextField::Description, lang) {
            return Some(description.to_string());
        }

        let ingredients = localized_list(self, ListField::Ingredients, lang);
        (!ingredients.is_empty()).then(|| ingredients.join(", "))
    }

    pub fn has_video(&self) -> bool {
        self.video.as_deref().is_some_and(|uri| !uri.trim().is_empty())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{CocktailCategory, MenuItem, MenuItemId};

    pub fn item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            name_en: None,
            description: None,
            description_en: None,
            price: "12,00 €".to_string(),
            ingredients: None,
            ingredients_en: None,
            history: None,
            history_en: None,
            tags: None,
            tags_en: None,
            image: None,
            video: None,
            category: None,
        }
    }

    pub fn cocktail(id: &str, name: &str, category: CocktailCategory) -> MenuItem {
        MenuItem { category: Some(category), ..item(id, name) }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::item;
    use super::{localized, localized_list, Language, ListField, MenuItem, TextField};

    fn translated() -> MenuItem {
        MenuItem {
            name_en: Some("Garden Gin".to_string()),
            description: Some("Ginebra con pepino y albahaca".to_string()),
            description_en: Some("Gin with cucumber and basil".to_string()),
            ingredients: Some(vec!["Ginebra".to_string(), "Pepino".to_string()]),
            ingredients_en: Some(vec!["Gin".to_string(), "Cucumber".to_string()]),
            ..item("gin-jardin", "Gin del Jardín")
        }
    }

    #[test]
    fn english_reads_translated_fields() {
        let item = translated();
        assert_eq!(item.display_name(Language::En), "Garden Gin");
        assert_eq!(
            localized(&item, TextField::Description, Language::En),
            Some("Gin with cucumber and basil")
        );
        assert_eq!(localized_list(&item, ListField::Ingredients, Language::En)[1], "Cucumber");
    }

    #[test]
    fn spanish_ignores_translations() {
        let item = translated();
        assert_eq!(item.display_name(Language::Es), "Gin del Jardín");
        assert_eq!(
            localized(&item, TextField::Description, Language::Es),
            Some("Ginebra con pepino y albahaca")
        );
    }

    #[test]
    fn missing_translation_falls_back_to_base_verbatim() {
        let item = MenuItem {
            description: Some("Croquetas caseras de jamón".to_string()),
            ..item("croquetas", "Croquetas de Jamón")
        };

        assert_eq!(item.display_name(Language::En), "Croquetas de Jamón");
        assert_eq!(
            localized(&item, TextField::Description, Language::En),
            Some("Croquetas caseras de jamón")
        );
    }

    #[test]
    fn blank_translation_counts_as_absent() {
        let item = MenuItem {
            name_en: Some("   ".to_string()),
            tags: Some(vec!["Clásico".to_string()]),
            tags_en: Some(Vec::new()),
            ..item("negroni", "Negroni")
        };

        assert_eq!(item.display_name(Language::En), "Negroni");
        assert_eq!(localized_list(&item, ListField::Tags, Language::En), ["Clásico".to_string()]);
    }

    #[test]
    fn absent_fields_are_none_or_empty() {
        let item = item("agua", "Agua Mineral");
        assert_eq!(localized(&item, TextField::History, Language::En), None);
        assert!(localized_list(&item, ListField::Ingredients, Language::Es).is_empty());
        assert_eq!(item.details(Language::Es), None);
    }

    #[test]
    fn details_fall_back_to_joined_ingredients() {
        let item = MenuItem {
            ingredients: Some(vec!["Ron".to_string(), "Menta".to_string(), "Lima".to_string()]),
            ..item("mojito", "Mojito")
        };

        assert_eq!(item.details(Language::En).as_deref(), Some("Ron, Menta, Lima"));
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("EN".parse::<Language>().ok(), Some(Language::En));
        assert_eq!(" es ".parse::<Language>().ok(), Some(Language::Es));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Es.toggled(), Language::En);
    }
}
