use serde::{Deserialize, Serialize};

use crate::domain::menu::Language;
use crate::errors::DomainError;

/// Sommelier suggestion for an opened item. Field names follow the
/// structured-output contract sent to the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingRecommendation {
    pub suggested_item: String,
    pub recommendation: String,
    pub reason: String,
}

/// Menu section of the item a pairing is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingSection {
    Cocktail,
    Snack,
}

impl PairingSection {
    pub fn from_is_cocktail(is_cocktail: bool) -> Self {
        if is_cocktail {
            Self::Cocktail
        } else {
            Self::Snack
        }
    }

    /// Section the candidates are drawn from.
    pub fn complement(self) -> Self {
        match self {
            Self::Cocktail => Self::Snack,
            Self::Snack => Self::Cocktail,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Cocktail, Language::Es) => "Cóctel",
            (Self::Cocktail, Language::En) => "Cocktail",
            (Self::Snack, _) => "Snack",
        }
    }

    pub fn plural_label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Cocktail, Language::Es) => "Cócteles",
            (Self::Cocktail, Language::En) => "Cocktails",
            (Self::Snack, _) => "Snacks",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuTab {
    #[default]
    Cocktails,
    Snacks,
    Drinks,
}

impl MenuTab {
    /// Drinks never request a pairing.
    pub fn pairing_section(self) -> Option<PairingSection> {
        match self {
            Self::Cocktails => Some(PairingSection::Cocktail),
            Self::Snacks => Some(PairingSection::Snack),
            Self::Drinks => None,
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Cocktails, Language::Es) => "Cócteles",
            (Self::Cocktails, Language::En) => "Cocktails",
            (Self::Snacks, _) => "Snacks",
            (Self::Drinks, Language::Es) => "Bebidas",
            (Self::Drinks, Language::En) => "Drinks",
        }
    }
}

impl std::str::FromStr for MenuTab {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cocktails" => Ok(Self::Cocktails),
            "snacks" => Ok(Self::Snacks),
            "drinks" => Ok(Self::Drinks),
            other => Err(DomainError::UnknownTab(other.to_string())),
        }
    }
}
