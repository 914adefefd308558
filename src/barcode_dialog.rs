//! Modal capture of the text to encode in a new barcode.
//!
//! The dialog stays open until it is cancelled or submitted with a
//! non-blank code. A blank submission shows a message and keeps it open.

use crate::constants::EMPTY_BARCODE_MESSAGE;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarcodeInputError {
    #[error("Enter a code for the barcode!")]
    EmptyCode,
}

/// Outcome of the dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogResult {
    #[default]
    Pending,
    Accepted(String),
    Cancelled,
}

/// State behind the barcode input dialog.
#[derive(Debug, Clone, Default)]
pub struct BarcodeInput {
    text: String,
    message: Option<&'static str>,
    result: DialogResult,
}

impl BarcodeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entered text; clears any message from a blank submit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.message = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Accept the trimmed text, or reject a blank one and stay open.
    pub fn submit(&mut self) -> Result<String, BarcodeInputError> {
        let code = self.text.trim();
        if code.is_empty() {
            self.message = Some(EMPTY_BARCODE_MESSAGE);
            return Err(BarcodeInputError::EmptyCode);
        }

        let code = code.to_string();
        self.message = None;
        self.result = DialogResult::Accepted(code.clone());
        Ok(code)
    }

    pub fn cancel(&mut self) {
        self.result = DialogResult::Cancelled;
    }

    pub fn result(&self) -> &DialogResult {
        &self.result
    }

    pub fn is_open(&self) -> bool {
        self.result == DialogResult::Pending
    }

    /// Message to show under the input, if any
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Accepted code, or `None` when cancelled or still open
    pub fn into_code(self) -> Option<String> {
        match self.result {
            DialogResult::Accepted(code) => Some(code),
            DialogResult::Pending | DialogResult::Cancelled => None,
        }
    }
}
