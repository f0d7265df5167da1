//! chatdoc - chat transcripts to structured documents with native math
//!
//! Message bodies are segmented line by line into code, tables, formulas,
//! images and text. Formula spans are compiled by a self-contained LaTeX
//! parser into `MathNode` trees and serialized as Office Math Markup
//! (`m:oMath`), ready to be appended to a word-processor paragraph.
//!
//! # Example
//!
//! ```
//! use chatdoc::{compile, compile_and_serialize, segment, MathNode, Segment};
//!
//! let segments = segment("Intro\n$$\\frac{a}{b}$$");
//! assert!(matches!(segments[1], Segment::BlockFormula { .. }));
//!
//! let nodes = compile(r"\frac{a}{b}");
//! assert!(matches!(nodes[0], MathNode::Fraction { .. }));
//!
//! let zone = compile_and_serialize(r"x^2");
//! assert!(zone.to_markup().contains("m:sSup"));
//! ```

pub mod core;
pub mod pipeline;
pub mod utils;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use chatdoc_ir::{
    plain_text, Alignment, Block, Document, Inline, InlineSpan, MathNode, Role, Segment, TableRow,
};
pub use chatdoc_omml_backend::{
    fallback_run, render_math_zone, OmmlElement, OmmlNode, OmmlRenderOptions, RenderError,
};

pub use crate::core::latex2omml::{
    compile, compile_and_serialize, compile_and_serialize_with_options, latex_to_omml,
    latex_to_omml_with_options, read_group, read_group_or_command, try_compile_and_serialize,
};
pub use crate::core::markdown::{segment, split_inline};
pub use pipeline::{build_document, build_document_at, ChatExport, ChatMessage, ExportOptions};
pub use utils::{ExportError, ExportResult};
