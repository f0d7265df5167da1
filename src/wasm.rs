//! WASM bindings for chatdoc
//!
//! JavaScript-accessible entry points for math compilation, segmentation and
//! chat export.

use wasm_bindgen::prelude::*;

use serde::{Deserialize, Serialize};

use chatdoc_omml_backend::OmmlRenderOptions;

/// Export options (exposed to WASM)
#[derive(Serialize, Deserialize)]
pub struct WasmExportOptions {
    #[serde(default = "default_user_label")]
    pub user_label: String,
    #[serde(default = "default_assistant_label")]
    pub assistant_label: String,
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
    #[serde(default)]
    pub render: OmmlRenderOptions,
}

impl Default for WasmExportOptions {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            assistant_label: default_assistant_label(),
            include_timestamp: true,
            render: OmmlRenderOptions::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_user_label() -> String {
    "You".to_string()
}

fn default_assistant_label() -> String {
    "Assistant".to_string()
}

/// Conversion result with additional metadata
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
}

/// Serialize a value to JsValue, returning an error object on failure.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ConvertResult {
            output: String::new(),
            success: false,
            error: Some(format!("Serialization error: {}", e)),
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a LaTeX expression (without `$` delimiters) to OMML markup.
#[wasm_bindgen(js_name = "latexToOmml")]
pub fn latex_to_omml_wasm(input: &str) -> String {
    crate::latex_to_omml(input)
}

/// Segment a message body; returns an array of segment objects.
#[wasm_bindgen(js_name = "segmentMessage")]
pub fn segment_message_wasm(input: &str) -> JsValue {
    to_js_value(&crate::segment(input))
}

/// Convert a chat export request (JSON text) to the document IR.
#[wasm_bindgen(js_name = "exportChat")]
pub fn export_chat_wasm(request: &str, options: JsValue) -> JsValue {
    let opts: WasmExportOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let export_options = crate::ExportOptions {
        user_label: opts.user_label,
        assistant_label: opts.assistant_label,
        include_timestamp: opts.include_timestamp,
        render: opts.render,
        ..Default::default()
    };

    let result = crate::ChatExport::from_json(request)
        .and_then(|export| crate::build_document(&export, &export_options))
        .and_then(|doc| serde_json::to_string(&doc).map_err(crate::ExportError::from));

    match result {
        Ok(output) => to_js_value(&ConvertResult {
            output,
            success: true,
            error: None,
        }),
        Err(e) => to_js_value(&ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
        }),
    }
}
