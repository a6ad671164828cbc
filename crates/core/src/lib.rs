pub mod catalog;
pub mod config;
pub mod detail;
pub mod domain;
pub mod errors;
pub mod selection;
pub mod share;

pub use catalog::{Catalog, CocktailFilter, DrinkCategory};
pub use detail::{DetailMode, DetailView, PairingOutcome, PairingState, PairingTicket};
pub use domain::menu::{
    localized, localized_list, CocktailCategory, Language, ListField, MenuItem, MenuItemId,
    TextField,
};
pub use domain::pairing::{MenuTab, PairingRecommendation, PairingSection};
pub use errors::{CatalogError, DomainError};
pub use selection::{Selection, SelectionEntry};
pub use share::{share_item, share_selection, SharePayload, ShareVenue};
