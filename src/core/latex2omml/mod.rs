//! LaTeX to OMML converter
//!
//! `compile` turns a LaTeX expression into `MathNode` siblings; the OMML
//! backend turns those into one `m:oMath` zone. `compile_and_serialize` is
//! the boundary the document assembler calls: it always returns an element,
//! substituting an italic text run holding the LaTeX source when rendering
//! fails.

pub mod compiler;
pub mod group;
pub mod symbols;

use std::panic::{self, AssertUnwindSafe};

use chatdoc_omml_backend::{
    fallback_run, render_math_zone, OmmlElement, OmmlRenderOptions, RenderError,
};

pub use compiler::{compile, MAX_DEPTH};
pub use group::{read_group, read_group_or_command};

/// Compile and render with default options.
pub fn compile_and_serialize(latex: &str) -> OmmlElement {
    compile_and_serialize_with_options(latex, &OmmlRenderOptions::default())
}

pub fn compile_and_serialize_with_options(latex: &str, options: &OmmlRenderOptions) -> OmmlElement {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        try_compile_and_serialize(latex, options)
    }));
    match attempt {
        Ok(Ok(zone)) => zone,
        Ok(Err(err)) => {
            log::warn!("could not render {:?} ({}), using text fallback", latex, err);
            fallback_run(latex, options)
        }
        Err(_) => {
            log::warn!("math compiler panicked on {:?}, using text fallback", latex);
            fallback_run(latex, options)
        }
    }
}

/// Compile and render without the text fallback.
pub fn try_compile_and_serialize(
    latex: &str,
    options: &OmmlRenderOptions,
) -> Result<OmmlElement, RenderError> {
    render_math_zone(&compile(latex), options)
}

/// Convert a LaTeX expression straight to OMML markup text.
pub fn latex_to_omml(latex: &str) -> String {
    compile_and_serialize(latex).to_markup()
}

pub fn latex_to_omml_with_options(latex: &str, options: &OmmlRenderOptions) -> String {
    compile_and_serialize_with_options(latex, options).to_markup()
}
