//! Printer capability contract.
//!
//! The crate ships no device adapter. Anything that can take a rendered
//! label implements [`Printer`]; [`print_label`] rasterizes a label to PNG
//! and submits it.

pub mod error;
pub mod options;

pub use error::{PrinterError, PrinterResult};
pub use options::PrintOptions;

use crate::label::Label;
use crate::raster;

/// A label printer.
///
/// No retry, timeout, or ordering guarantees are implied; adapters report
/// failures through [`PrinterError`].
pub trait Printer: Send {
    /// Unique name or identifier
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    /// Whether the printer can accept a job right now
    fn is_ready(&self) -> bool;

    fn connect(&mut self) -> PrinterResult<()>;

    fn disconnect(&mut self) -> PrinterResult<()>;

    /// Submit data for printing.
    fn print(&mut self, data: &[u8], options: Option<&PrintOptions>) -> PrinterResult<()>;

    /// Human-readable status (paper, errors, head temperature, ...)
    fn status(&self) -> String;

    /// Ids of jobs currently queued
    fn print_queue(&self) -> Vec<String>;

    fn cancel_print_job(&mut self, id: &str) -> PrinterResult<()>;

    fn clear_queue(&mut self) -> PrinterResult<()>;
}

/// Render `label` to PNG and submit it to `printer`.
///
/// Fails with [`PrinterError::NotReady`] without submitting anything if the
/// printer is not ready.
pub fn print_label(
    printer: &mut dyn Printer,
    label: &Label,
    options: Option<&PrintOptions>,
) -> PrinterResult<()> {
    if !printer.is_ready() {
        return Err(PrinterError::NotReady(printer.name().to_string()));
    }
    if let Some(options) = options {
        options.validate()?;
    }

    let png = raster::render_label_png(label).map_err(|e| PrinterError::Render(e.to_string()))?;
    printer.print(&png, options)?;

    tracing::info!(
        printer = printer.name(),
        items = label.len(),
        bytes = png.len(),
        copies = options.map_or(1, |o| o.copies),
        "label sent to printer"
    );
    Ok(())
}
