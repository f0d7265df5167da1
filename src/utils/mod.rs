//! Utility modules

pub mod error;

pub use error::{ExportError, ExportResult};
