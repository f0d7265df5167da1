//! Conversion cores
//!
//! - `latex2omml`: LaTeX expression compiler and OMML boundary
//! - `markdown`: message body segmentation and inline spans

pub mod latex2omml;
pub mod markdown;
