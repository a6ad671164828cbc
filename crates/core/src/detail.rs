//! Detail view state for the currently opened menu item.
//!
//! Opening an item hands out a [`PairingTicket`] stamped with a generation
//! number. A recommendation is only stored when its ticket still matches the
//! open item, so a slow response for an item the visitor has already left is
//! dropped instead of overwriting the current one.

use serde::Serialize;
use tracing::debug;

use crate::domain::menu::{Language, MenuItem};
use crate::domain::pairing::{MenuTab, PairingRecommendation, PairingSection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailMode {
    #[default]
    Info,
    Video,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "recommendation", rename_all = "snake_case")]
pub enum PairingState {
    NotApplicable,
    Pending,
    Ready(PairingRecommendation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingTicket {
    generation: u64,
    item: MenuItem,
    section: PairingSection,
    language: Language,
}

impl PairingTicket {
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn section(&self) -> PairingSection {
        self.section
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingOutcome {
    pub ticket: PairingTicket,
    pub recommendation: PairingRecommendation,
}

#[derive(Clone, Debug)]
struct OpenItem {
    item: MenuItem,
    mode: DetailMode,
    pairing: PairingState,
}

#[derive(Clone, Debug, Default)]
pub struct DetailView {
    open: Option<OpenItem>,
    generation: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `item` from `tab`, superseding whatever was open. Returns a
    /// ticket when the tab requests a pairing.
    pub fn open(
        &mut self,
        item: MenuItem,
        tab: MenuTab,
        mode: DetailMode,
        lang: Language,
    ) -> Option<PairingTicket> {
        self.generation += 1;

        let mode = if mode == DetailMode::Video && !item.has_video() { DetailMode::Info } else { mode };
        let section = tab.pairing_section();
        let pairing = if section.is_some() { PairingState::Pending } else { PairingState::NotApplicable };
        let ticket = section.map(|section| PairingTicket {
            generation: self.generation,
            item: item.clone(),
            section,
            language: lang,
        });

        self.open = Some(OpenItem { item, mode, pairing });
        ticket
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.open = None;
    }

    /// Stores the recommendation if its ticket is still current. Stale
    /// outcomes are discarded and yield `false`.
    pub fn apply(&mut self, outcome: PairingOutcome) -> bool {
        let generation = self.generation;
        let Some(open) = self.open.as_mut() else {
            debug!(
                event_name = "detail.pairing.discarded",
                item_id = %outcome.ticket.item.id,
                "pairing resolved after the detail view closed"
            );
            return false;
        };

        if outcome.ticket.generation != generation || outcome.ticket.item.id != open.item.id {
            debug!(
                event_name = "detail.pairing.discarded",
                item_id = %outcome.ticket.item.id,
                current_item_id = %open.item.id,
                "stale pairing discarded"
            );
            return false;
        }

        open.pairing = PairingState::Ready(outcome.recommendation);
        true
    }

    pub fn toggle_mode(&mut self) -> Option<DetailMode> {
        let open = self.open.as_mut()?;
        open.mode = match open.mode {
            DetailMode::Info if open.item.has_video() => DetailMode::Video,
            _ => DetailMode::Info,
        };
        Some(open.mode)
    }

    pub fn current_item(&self) -> Option<&MenuItem> {
        self.open.as_ref().map(|open| &open.item)
    }

    pub fn mode(&self) -> Option<DetailMode> {
        self.open.as_ref().map(|open| open.mode)
    }

    pub fn pairing(&self) -> Option<&PairingState> {
        self.open.as_ref().map(|open| &open.pairing)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.pairing(), Some(PairingState::Pending))
    }
}
