//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestLabelBuilder` - Builder pattern for creating test labels with items
//! - `ScriptedPrompts` - Drop prompts with canned answers
//! - `RecordingPrinter` - A printer that keeps what it was sent

use labelboard::drop::DropPrompts;
use labelboard::label::Label;
use labelboard::printer::{PrintOptions, Printer, PrinterError, PrinterResult};
use labelboard::types::ItemContent;
use std::path::PathBuf;

// ============================================================================
// TestLabelBuilder - Builder pattern for creating test labels
// ============================================================================

/// Builder for creating test labels with items.
///
/// # Example
/// ```ignore
/// let label = TestLabelBuilder::new()
///     .with_rectangle((0.0, 0.0))
///     .with_text("Price", (100.0, 0.0))
///     .with_item_size(100.0, 50.0)
///     .build();
/// ```
pub struct TestLabelBuilder {
    items: Vec<((f32, f32), ItemContent)>,
    item_size: (f32, f32),
}

impl Default for TestLabelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLabelBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            item_size: (350.0, 200.0),
        }
    }

    /// Size given to every item added by the builder.
    pub fn with_item_size(mut self, w: f32, h: f32) -> Self {
        self.item_size = (w, h);
        self
    }

    pub fn with_rectangle(mut self, pos: (f32, f32)) -> Self {
        self.items.push((pos, ItemContent::default_rectangle()));
        self
    }

    pub fn with_ellipse(mut self, pos: (f32, f32)) -> Self {
        self.items.push((pos, ItemContent::default_ellipse()));
        self
    }

    pub fn with_line(mut self, pos: (f32, f32)) -> Self {
        let width = self.item_size.0;
        self.items.push((pos, ItemContent::default_line(width)));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, pos: (f32, f32)) -> Self {
        let mut content = ItemContent::default_text_box();
        if let ItemContent::TextBox { text: t, .. } = &mut content {
            *t = text.into();
        }
        self.items.push((pos, content));
        self
    }

    pub fn build(self) -> Label {
        let mut label = Label::new();
        for (pos, content) in self.items {
            label.add_item(pos, self.item_size, content);
        }
        label
    }
}

/// Create an empty label.
pub fn empty_label() -> Label {
    Label::new()
}

/// Assert that a label has the expected number of items.
pub fn assert_item_count(label: &Label, expected: usize) {
    assert_eq!(
        label.len(),
        expected,
        "Expected {} items, found {}",
        expected,
        label.len()
    );
}

// ============================================================================
// Scripted prompts
// ============================================================================

/// Drop prompts answering from canned values; `None` acts as a cancel.
#[derive(Default)]
pub struct ScriptedPrompts {
    pub barcode: Option<String>,
    pub image: Option<PathBuf>,
}

impl ScriptedPrompts {
    pub fn cancelling() -> Self {
        Self::default()
    }

    pub fn barcode(text: &str) -> Self {
        Self {
            barcode: Some(text.to_string()),
            image: None,
        }
    }

    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self {
            barcode: None,
            image: Some(path.into()),
        }
    }
}

impl DropPrompts for ScriptedPrompts {
    fn barcode_text(&mut self) -> Option<String> {
        self.barcode.take()
    }

    fn pick_image(&mut self) -> Option<PathBuf> {
        self.image.take()
    }
}

// ============================================================================
// Recording printer
// ============================================================================

/// In-memory printer that queues every job it receives.
pub struct RecordingPrinter {
    pub ready: bool,
    pub connected: bool,
    pub jobs: Vec<(Vec<u8>, Option<PrintOptions>)>,
}

impl RecordingPrinter {
    pub fn ready() -> Self {
        Self {
            ready: true,
            connected: true,
            jobs: Vec::new(),
        }
    }

    pub fn offline() -> Self {
        Self {
            ready: false,
            connected: false,
            jobs: Vec::new(),
        }
    }
}

impl Printer for RecordingPrinter {
    fn name(&self) -> &str {
        "recorder"
    }

    fn model(&self) -> &str {
        "RP-1"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn connect(&mut self) -> PrinterResult<()> {
        self.connected = true;
        self.ready = true;
        Ok(())
    }

    fn disconnect(&mut self) -> PrinterResult<()> {
        self.connected = false;
        self.ready = false;
        Ok(())
    }

    fn print(&mut self, data: &[u8], options: Option<&PrintOptions>) -> PrinterResult<()> {
        self.jobs.push((data.to_vec(), options.cloned()));
        Ok(())
    }

    fn status(&self) -> String {
        format!("{} job(s) queued", self.jobs.len())
    }

    fn print_queue(&self) -> Vec<String> {
        (0..self.jobs.len()).map(|i| i.to_string()).collect()
    }

    fn cancel_print_job(&mut self, id: &str) -> PrinterResult<()> {
        let index: usize = id
            .parse()
            .map_err(|_| PrinterError::JobNotFound(id.to_string()))?;
        if index >= self.jobs.len() {
            return Err(PrinterError::JobNotFound(id.to_string()));
        }
        self.jobs.remove(index);
        Ok(())
    }

    fn clear_queue(&mut self) -> PrinterResult<()> {
        self.jobs.clear();
        Ok(())
    }
}
