//! Markdown handling for chat message bodies
//!
//! Segmentation decides where formulas start and end; the LaTeX compiler
//! only ever sees the spans produced here.

mod inline;
mod segment;
mod table;

pub use inline::split_inline;
pub use segment::{segment, FENCE, FORMULA_FENCE};
pub use table::{is_separator_row, parse_row};
