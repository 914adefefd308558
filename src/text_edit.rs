//! In-place editing of text box items.
//!
//! A text box is read-only on the label. Double-clicking it opens an edit
//! session; the session ends on focus loss, Escape, or Enter (Ctrl+Enter
//! when the box accepts return, where plain Enter inserts a newline).

use crate::error::LabelError;
use crate::label::Label;
use crate::types::ItemContent;
use std::time::{Duration, Instant};

/// Blur events this soon after the session starts are ignored; the input
/// receives one as the double-click focus settles.
const BLUR_GRACE: Duration = Duration::from_millis(150);

/// Key presses that matter to an edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter { ctrl: bool },
    Escape,
    Other,
}

/// What the editor should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the input handle the key
    Continue,
    /// Insert a line break at the caret
    InsertNewline,
    /// Commit the text and leave edit mode
    Finish,
}

/// An open edit session on one text box item.
#[derive(Debug, Clone)]
pub struct TextEditSession {
    item_id: u64,
    accepts_return: bool,
    initial_text: String,
    started_at: Instant,
}

impl TextEditSession {
    /// Put a text box into edit mode.
    pub fn begin(label: &mut Label, item_id: u64) -> Result<Self, LabelError> {
        let content = label
            .content_mut(item_id)
            .ok_or(LabelError::ItemNotFound(item_id))?;

        let ItemContent::TextBox {
            text,
            read_only,
            accepts_return,
            ..
        } = content
        else {
            return Err(LabelError::NotEditable(item_id));
        };

        *read_only = false;
        tracing::debug!(item_id, "text edit started");

        Ok(Self {
            item_id,
            accepts_return: *accepts_return,
            initial_text: text.clone(),
            started_at: Instant::now(),
        })
    }

    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    /// Whether plain Enter inserts a line break
    pub fn accepts_return(&self) -> bool {
        self.accepts_return
    }

    /// Text the box held when editing began
    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    /// Caret offset when editing begins (end of text)
    pub fn initial_caret(&self) -> usize {
        self.initial_text.len()
    }

    /// Decide what a key press does.
    pub fn handle_key(&self, key: EditKey) -> KeyOutcome {
        match key {
            EditKey::Escape => KeyOutcome::Finish,
            EditKey::Enter { ctrl: true } if self.accepts_return => KeyOutcome::Finish,
            EditKey::Enter { ctrl: false } if self.accepts_return => KeyOutcome::InsertNewline,
            EditKey::Enter { .. } => KeyOutcome::Finish,
            EditKey::Other => KeyOutcome::Continue,
        }
    }

    /// Whether a focus-loss event should end the session
    pub fn should_finish_on_blur(&self) -> bool {
        self.started_at.elapsed() >= BLUR_GRACE
    }

    /// Write the edited text back and return the box to read-only.
    ///
    /// Returns `false` if the item disappeared while editing.
    pub fn commit(self, label: &mut Label, new_text: &str) -> bool {
        let Some(ItemContent::TextBox {
            text, read_only, ..
        }) = label.content_mut(self.item_id)
        else {
            tracing::warn!(item_id = self.item_id, "edited text box no longer exists");
            return false;
        };

        *read_only = true;
        if text.as_str() != new_text {
            *text = new_text.to_string();
            tracing::info!(item_id = self.item_id, len = new_text.len(), "text updated");
        }
        true
    }
}
