use std::path::PathBuf;

use thiserror::Error;

use crate::domain::menu::MenuItemId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported language `{0}` (expected es|en)")]
    UnknownLanguage(String),
    #[error("unsupported menu tab `{0}` (expected cocktails|snacks|drinks)")]
    UnknownTab(String),
    #[error(
        "unsupported cocktail filter `{0}` (expected all|con-alcohol|low-alcohol|sin-alcohol)"
    )]
    UnknownFilter(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate menu item id `{0}`")]
    DuplicateId(MenuItemId),
    #[error("menu item `{0}` has an empty name")]
    EmptyName(MenuItemId),
    #[error("cocktail `{0}` is missing its alcohol category")]
    MissingCategory(MenuItemId),
    #[error("menu item `{0}` is not a cocktail but declares an alcohol category")]
    UnexpectedCategory(MenuItemId),
    #[error("drink category {0} has an empty name")]
    EmptyDrinkCategory(usize),
}

impl CatalogError {
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::ReadFile { .. } => "catalog_read",
            Self::Parse(_) => "catalog_parse",
            Self::DuplicateId(_)
            | Self::EmptyName(_)
            | Self::MissingCategory(_)
            | Self::UnexpectedCategory(_)
            | Self::EmptyDrinkCategory(_) => "catalog_validation",
        }
    }
}
