//! The visitor's selection: items they intend to show a waiter.
//!
//! Entries keep first-add order and there is never more than one entry per
//! item id. Quantities never drop below one; an entry only disappears
//! through [`Selection::remove`].

use serde::Serialize;

use crate::domain::menu::{MenuItem, MenuItemId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionEntry {
    item: MenuItem,
    quantity: u32,
}

impl SelectionEntry {
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` with quantity 1, or increments an existing entry.
    /// Returns the resulting quantity.
    pub fn add(&mut self, item: &MenuItem) -> u32 {
        if let Some(entry) = self.entry_mut(&item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return entry.quantity;
        }

        self.entries.push(SelectionEntry { item: item.clone(), quantity: 1 });
        1
    }

    /// Shifts the quantity by `delta`, clamped to at least 1. Unknown ids are
    /// ignored and yield `None`.
    pub fn adjust_quantity(&mut self, id: &MenuItemId, delta: i64) -> Option<u32> {
        let entry = self.entry_mut(id)?;
        let adjusted = i64::from(entry.quantity).saturating_add(delta).clamp(1, i64::from(u32::MAX));
        entry.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
        Some(entry.quantity)
    }

    pub fn remove(&mut self, id: &MenuItemId) -> Option<SelectionEntry> {
        let index = self.entries.iter().position(|entry| &entry.item.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_selected(&self, id: &MenuItemId) -> bool {
        self.entries.iter().any(|entry| &entry.item.id == id)
    }

    pub fn quantity_of(&self, id: &MenuItemId) -> u32 {
        self.entries.iter().find(|entry| &entry.item.id == id).map_or(0, |entry| entry.quantity)
    }

    /// Sum of all quantities (the badge count), not the number of entries.
    pub fn total_count(&self) -> u32 {
        self.entries.iter().fold(0u32, |total, entry| total.saturating_add(entry.quantity))
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &MenuItemId) -> Option<&mut SelectionEntry> {
        self.entries.iter_mut().find(|entry| &entry.item.id == id)
    }
}
