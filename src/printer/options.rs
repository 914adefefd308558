//! Print options bundle

use super::error::{PrinterError, PrinterResult};
use serde::{Deserialize, Serialize};

/// Options passed along with a print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Paper/media type; `None` lets the printer pick
    pub paper_type: Option<String>,
    pub duplex: bool,
    pub color: bool,
    pub copies: u32,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paper_type: None,
            duplex: false,
            color: false,
            copies: 1,
        }
    }
}

impl PrintOptions {
    /// Reject options no printer could honour.
    pub fn validate(&self) -> PrinterResult<()> {
        if self.copies == 0 {
            return Err(PrinterError::InvalidOptions(
                "copies must be at least 1".to_string(),
            ));
        }
        if self.paper_type.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(PrinterError::InvalidOptions(
                "paper type must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
