//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use vellum_browser::EditorConfig;

/// Editor options as passed from JavaScript.
///
/// Only the toolbar is required. A `plugins` array of objects exposing
/// `init(editor)` may sit alongside these fields on the same object; plugin
/// values cannot cross the serde boundary, so the constructor pulls them off
/// the raw object separately.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsEditorConfig {
    /// Tool identifiers rendered into the toolbar, in order.
    pub toolbar: Vec<String>,
    /// Editing area height as a CSS length (e.g. `"300px"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Editing area width as a CSS length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Hint text shown while the editor is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl From<JsEditorConfig> for EditorConfig {
    fn from(config: JsEditorConfig) -> Self {
        EditorConfig {
            toolbar: config.toolbar,
            height: config.height,
            width: config.width,
            placeholder: config.placeholder,
        }
    }
}
