//! Static menu catalog.
//!
//! The catalog is loaded once at startup from a TOML document and is
//! immutable afterwards:
//!
//! ```toml
//! [[cocktails]]
//! id = "gin-jardin"
//! name = "Gin del Jardín"
//! name_en = "Garden Gin"
//! price = "14,00 €"
//! category = "CON ALCOHOL"
//!
//! [[snacks]]
//! id = "aceitunas"
//! name = "Aceitunas Aliñadas"
//! price = "5,00 €"
//!
//! [[drinks]]
//! name = "Refrescos"
//! name_en = "Soft Drinks"
//!
//! [[drinks.items]]
//! id = "tonica"
//! name = "Tónica"
//! price = "3,50 €"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::menu::{CocktailCategory, Language, MenuItem, MenuItemId};
use crate::domain::pairing::{MenuTab, PairingSection};
use crate::errors::{CatalogError, DomainError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl DrinkCategory {
    pub fn display_name(&self, lang: Language) -> &str {
        match lang {
            Language::Es => &self.name,
            Language::En => {
                self.name_en.as_deref().filter(|name| !name.trim().is_empty()).unwrap_or(&self.name)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CocktailFilter {
    #[default]
    All,
    Only(CocktailCategory),
}

impl CocktailFilter {
    pub fn matches(self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == Some(category),
        }
    }
}

impl std::str::FromStr for CocktailFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = filter_slug(value);
        if normalized == "all" {
            return Ok(Self::All);
        }

        // Any localized category label is accepted, e.g. `sin-alcohol` or `alcohol-free`.
        CocktailCategory::ALL
            .into_iter()
            .find(|category| {
                [Language::Es, Language::En]
                    .into_iter()
                    .any(|lang| filter_slug(category.label(lang)) == normalized)
            })
            .map(Self::Only)
            .ok_or_else(|| DomainError::UnknownFilter(value.trim().to_string()))
    }
}

fn filter_slug(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    cocktails: Vec<MenuItem>,
    snacks: Vec<MenuItem>,
    drinks: Vec<DrinkCategory>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    cocktails: Vec<MenuItem>,
    #[serde(default)]
    snacks: Vec<MenuItem>,
    #[serde(default)]
    drinks: Vec<DrinkCategory>,
}

impl Catalog {
    pub fn new(
        cocktails: Vec<MenuItem>,
        snacks: Vec<MenuItem>,
        drinks: Vec<DrinkCategory>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { cocktails, snacks, drinks };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let document = toml::from_str::<CatalogDocument>(raw)?;
        Self::new(document.cocktails, document.snacks, document.drinks)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let catalog = Self::from_toml_str(&raw)?;

        info!(
            event_name = "catalog.loaded",
            path = %path.display(),
            cocktails = catalog.cocktails.len(),
            snacks = catalog.snacks.len(),
            drink_categories = catalog.drinks.len(),
            "menu catalog loaded"
        );
        Ok(catalog)
    }

    pub fn cocktails(&self) -> &[MenuItem] {
        &self.cocktails
    }

    pub fn snacks(&self) -> &[MenuItem] {
        &self.snacks
    }

    pub fn drinks(&self) -> &[DrinkCategory] {
        &self.drinks
    }

    pub fn filter_cocktails(&self, filter: CocktailFilter) -> impl Iterator<Item = &MenuItem> {
        self.cocktails.iter().filter(move |item| filter.matches(item))
    }

    /// Candidates for a pairing: always the section opposite to `section`.
    pub fn pairing_pool(&self, section: PairingSection) -> &[MenuItem] {
        match section.complement() {
            PairingSection::Cocktail => &self.cocktails,
            PairingSection::Snack => &self.snacks,
        }
    }

    pub fn find(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.entries().find(|(_, item)| &item.id == id).map(|(_, item)| item)
    }

    pub fn section_of(&self, id: &MenuItemId) -> Option<MenuTab> {
        self.entries().find(|(_, item)| &item.id == id).map(|(tab, _)| tab)
    }

    fn entries(&self) -> impl Iterator<Item = (MenuTab, &MenuItem)> {
        let cocktails = self.cocktails.iter().map(|item| (MenuTab::Cocktails, item));
        let snacks = self.snacks.iter().map(|item| (MenuTab::Snacks, item));
        let drinks = self
            .drinks
            .iter()
            .flat_map(|category| category.items.iter())
            .map(|item| (MenuTab::Drinks, item));
        cocktails.chain(snacks).chain(drinks)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        for (tab, item) in self.entries() {
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(item.id.clone()));
            }
            match (tab, item.category) {
                (MenuTab::Cocktails, None) => {
                    return Err(CatalogError::MissingCategory(item.id.clone()))
                }
                (MenuTab::Snacks | MenuTab::Drinks, Some(_)) => {
                    return Err(CatalogError::UnexpectedCategory(item.id.clone()))
                }
                _ => {}
            }
        }

        if let Some(index) =
            self.drinks.iter().position(|category| category.name.trim().is_empty())
        {
            return Err(CatalogError::EmptyDrinkCategory(index));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{Catalog, CocktailFilter, DrinkCategory};
    use crate::domain::menu::fixtures::{cocktail, item};
    use crate::domain::menu::{CocktailCategory, Language, MenuItemId};
    use crate::domain::pairing::{MenuTab, PairingSection};
    use crate::errors::CatalogError;

    const SAMPLE: &str = r#"
[[cocktails]]
id = "gin-jardin"
name = "Gin del Jardín"
name_en = "Garden Gin"
price = "14,00 €"
category = "CON ALCOHOL"

[[cocktails]]
id = "spritz-ligero"
name = "Spritz Ligero"
price = "11,00 €"
category = "LOW ALCOHOL"

[[cocktails]]
id = "virgin-mule"
name = "Virgin Mule"
price = "9,00 €"
category = "SIN ALCOHOL"

[[snacks]]
id = "aceitunas"
name = "Aceitunas Aliñadas"
name_en = "Marinated Olives"
price = "5,00 €"

[[drinks]]
name = "Refrescos"
name_en = "Soft Drinks"

[[drinks.items]]
id = "tonica"
name = "Tónica"
price = "3,50 €"
"#;

    #[test]
    fn parses_all_sections() {
        let catalog = Catalog::from_toml_str(SAMPLE).expect("sample catalog is valid");

        assert_eq!(catalog.cocktails().len(), 3);
        assert_eq!(catalog.snacks().len(), 1);
        assert_eq!(catalog.drinks()[0].display_name(Language::En), "Soft Drinks");
        assert_eq!(catalog.section_of(&MenuItemId::new("tonica")), Some(MenuTab::Drinks));
        assert_eq!(
            catalog.find(&MenuItemId::new("aceitunas")).map(|item| item.name.as_str()),
            Some("Aceitunas Aliñadas")
        );
    }

    #[test]
    fn filters_cocktails_by_category_in_catalog_order() {
        let catalog = Catalog::from_toml_str(SAMPLE).expect("sample catalog is valid");

        let all: Vec<_> =
            catalog.filter_cocktails(CocktailFilter::All).map(|item| item.id.as_str()).collect();
        assert_eq!(all, ["gin-jardin", "spritz-ligero", "virgin-mule"]);

        let low: Vec<_> = catalog
            .filter_cocktails(CocktailFilter::Only(CocktailCategory::LowAlcohol))
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(low, ["spritz-ligero"]);
    }

    #[test]
    fn pairing_pool_is_the_opposite_section() {
        let catalog = Catalog::from_toml_str(SAMPLE).expect("sample catalog is valid");

        let for_cocktail = catalog.pairing_pool(PairingSection::Cocktail);
        assert!(for_cocktail.iter().all(|item| catalog.snacks().contains(item)));

        let for_snack = catalog.pairing_pool(PairingSection::Snack);
        assert_eq!(for_snack.len(), 3);
        assert!(for_snack.iter().all(|item| item.category.is_some()));
    }

    #[test]
    fn rejects_duplicate_ids_across_sections() {
        let result = Catalog::new(
            vec![cocktail("mojito", "Mojito", CocktailCategory::WithAlcohol)],
            vec![item("mojito", "Mojito de Sandía")],
            Vec::new(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "mojito"));
    }

    #[test]
    fn rejects_category_mismatches() {
        let missing = Catalog::new(vec![item("mojito", "Mojito")], Vec::new(), Vec::new());
        assert!(matches!(missing, Err(CatalogError::MissingCategory(_))));

        let unexpected = Catalog::new(
            Vec::new(),
            Vec::new(),
            vec![DrinkCategory {
                name: "Vinos".to_string(),
                name_en: None,
                items: vec![cocktail("rioja", "Rioja", CocktailCategory::WithAlcohol)],
            }],
        );
        assert!(matches!(unexpected, Err(CatalogError::UnexpectedCategory(_))));
    }

    #[test]
    fn filter_parses_ui_spellings() {
        assert_eq!("ALL".parse::<CocktailFilter>().ok(), Some(CocktailFilter::All));
        assert_eq!(
            "SIN ALCOHOL".parse::<CocktailFilter>().ok(),
            Some(CocktailFilter::Only(CocktailCategory::AlcoholFree))
        );
        assert!("strong".parse::<CocktailFilter>().is_err());
    }

    #[test]
    fn filter_accepts_every_category_label() {
        for category in CocktailCategory::ALL {
            for lang in [Language::Es, Language::En] {
                assert_eq!(
                    category.label(lang).parse::<CocktailFilter>().ok(),
                    Some(CocktailFilter::Only(category)),
                    "label {} should select its category",
                    category.label(lang)
                );
            }
        }
        assert_eq!(
            "with_alcohol".parse::<CocktailFilter>().ok(),
            Some(CocktailFilter::Only(CocktailCategory::WithAlcohol))
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("menu.toml");
        assert!(matches!(Catalog::load(&missing), Err(CatalogError::ReadFile { .. })));

        fs::write(&missing, SAMPLE).expect("write catalog");
        assert!(Catalog::load(&missing).is_ok());
    }
}
