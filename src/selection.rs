//! Single-item selection.
//!
//! At most one placed item is selected at a time. The selection is plain
//! state owned by the application controller; it is never persisted.

use crate::label::Label;
use crate::types::PlacedItem;

/// Tracks the currently selected item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item, returning the previously selected one if it differs.
    pub fn select(&mut self, item_id: u64) -> Option<u64> {
        let previous = self.selected.replace(item_id);
        previous.filter(|&prev| prev != item_id)
    }

    /// Clear the selection, returning what was selected
    pub fn clear(&mut self) -> Option<u64> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn is_selected(&self, item_id: u64) -> bool {
        self.selected == Some(item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Remove the selected item from `label` and clear the selection.
///
/// Returns the removed item, or `None` when nothing was selected.
pub fn delete_selected(label: &mut Label, selection: &mut Selection) -> Option<PlacedItem> {
    let item_id = selection.clear()?;
    label.remove_item(item_id)
}
