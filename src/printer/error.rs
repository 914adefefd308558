//! Error types for printer operations

use thiserror::Error;

/// Errors a printer adapter can report
#[derive(Error, Debug)]
pub enum PrinterError {
    /// Printer is not connected or not ready to accept a job
    #[error("Printer {0} is not ready")]
    NotReady(String),

    /// Connecting to the device failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// No job with this id in the queue
    #[error("Print job {0} not found")]
    JobNotFound(String),

    /// Print options rejected before submission
    #[error("Invalid print options: {0}")]
    InvalidOptions(String),

    /// The label could not be rasterized for printing
    #[error("Failed to render label: {0}")]
    Render(String),

    /// IO error from the device transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for printer operations
pub type PrinterResult<T> = Result<T, PrinterError>;
