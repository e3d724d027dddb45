//! VellumEditor - the main editor wrapper for JavaScript.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use vellum_browser::{CommandError, Editor};

use crate::config::JsEditorConfig;

/// The main editor instance exposed to JavaScript.
///
/// Wraps the browser editor behind a shared handle, so plugins can keep
/// their own copy of the editor they were given. The toolbar and all
/// listeners detach when the last handle is freed.
#[wasm_bindgen]
#[derive(Clone)]
pub struct VellumEditor {
    inner: Rc<Editor>,
}

#[wasm_bindgen]
impl VellumEditor {
    /// Attach an editor to the element matched by `selector`.
    ///
    /// The config object carries the toolbar layout plus optional height,
    /// width, placeholder, and a `plugins` array. Each plugin exposes
    /// `init(editor)` (a bare function works too) and is called once with
    /// the editor handle after construction; a plugin that throws is
    /// reported and skipped without affecting the rest.
    ///
    /// Throws if the selector matches nothing or the toolbar names an
    /// unknown tool.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, config: JsValue) -> Result<VellumEditor, JsError> {
        let plugins = match js_sys::Reflect::get(&config, &JsValue::from_str("plugins")) {
            Ok(value) if value.is_undefined() || value.is_null() => None,
            Ok(value) => Some(
                value
                    .dyn_into::<js_sys::Array>()
                    .map_err(|_| JsError::new("Invalid config: plugins must be an array"))?,
            ),
            // Not an object; let the config parse below produce the error
            Err(_) => None,
        };

        let parsed: JsEditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;

        let editor = Editor::create_with_standard_plugins(selector, parsed.into())
            .map_err(|e| JsError::new(&e.to_string()))?;

        let editor = VellumEditor {
            inner: Rc::new(editor),
        };
        if let Some(ref plugins) = plugins {
            editor.apply_js_plugins(plugins);
        }
        Ok(editor)
    }

    // === Content access ===

    /// Get the editor's HTML content.
    #[wasm_bindgen(js_name = getContent)]
    pub fn get_content(&self) -> String {
        self.inner.content()
    }

    /// Replace the editor's HTML content.
    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&self, markup: &str) {
        self.inner.set_content(markup);
    }

    // === Geometry ===

    /// Set the editing area height (any CSS length).
    #[wasm_bindgen(js_name = setHeight)]
    pub fn set_height(&self, dimension: &str) {
        self.inner.set_height(dimension);
    }

    /// Set the editing area width (any CSS length).
    #[wasm_bindgen(js_name = setWidth)]
    pub fn set_width(&self, dimension: &str) {
        self.inner.set_width(dimension);
    }

    // === Commands ===

    /// Execute a registered command by name.
    ///
    /// Throws if no command is registered under `name` or the surface
    /// rejects it.
    #[wasm_bindgen(js_name = executeCommand)]
    pub fn execute_command(&self, name: &str, value: Option<String>) -> Result<(), JsError> {
        self.inner
            .execute_command(name, value.as_deref())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Register (or replace) a command backed by a JavaScript function.
    ///
    /// The function receives the command value, or `null` when none was
    /// given. A thrown exception is reported as a command failure.
    #[wasm_bindgen(js_name = registerCommand)]
    pub fn register_command(&self, name: &str, action: js_sys::Function) {
        self.inner.register_command(name, move |_surface, value| {
            let arg = value.map_or(JsValue::NULL, JsValue::from_str);
            match action.call1(&JsValue::NULL, &arg) {
                Ok(_) => Ok(()),
                Err(err) => Err(CommandError::Failed(format!("{err:?}"))),
            }
        });
    }

    /// Read a file (e.g. from a drop event or file input) and append it to
    /// the editor as an image. The read is asynchronous; failures are
    /// logged and insert nothing.
    #[wasm_bindgen(js_name = uploadImage)]
    pub fn upload_image(&self, file: web_sys::File) {
        self.inner.insert_image_from_file(&file);
    }

    // === Diagnostics ===

    /// Names and errors of plugins that failed during setup.
    #[wasm_bindgen(js_name = pluginFailures)]
    pub fn plugin_failures(&self) -> Vec<String> {
        self.inner
            .plugin_failures()
            .iter()
            .map(|failure| format!("{}: {}", failure.plugin, failure.error))
            .collect()
    }

    // === Element access ===

    /// The editable host element.
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.inner.element().clone()
    }
}

// Internal methods (not exposed to JS)
impl VellumEditor {
    /// Call each config plugin's `init` with this editor handle.
    ///
    /// A plugin is an object (or class) exposing `init(editor)`; a bare
    /// function is accepted too and called directly. An entry that throws
    /// or has no callable entry point is reported and skipped; later
    /// plugins still run, matching how native plugin failures are
    /// isolated.
    fn apply_js_plugins(&self, plugins: &js_sys::Array) {
        for (index, entry) in plugins.iter().enumerate() {
            let handle = JsValue::from(self.clone());
            let init = js_sys::Reflect::get(&entry, &JsValue::from_str("init"))
                .ok()
                .and_then(|value| value.dyn_into::<js_sys::Function>().ok());

            let called = match init {
                Some(init) => init.call1(&entry, &handle),
                None => match entry.dyn_ref::<js_sys::Function>() {
                    Some(function) => function.call1(&JsValue::NULL, &handle),
                    None => {
                        tracing::error!(index, "config plugin has no init function");
                        continue;
                    }
                },
            };
            if let Err(err) = called {
                tracing::error!(index, error = ?err, "config plugin threw during setup");
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    use super::VellumEditor;

    wasm_bindgen_test_configure!(run_in_browser);

    static NEXT_HOST: AtomicUsize = AtomicUsize::new(0);

    /// Append a fresh host element to the page; returns its selector.
    fn mount_host() -> String {
        let document = gloo_utils::document();
        let host = document.create_element("div").unwrap();
        let id = format!("vellum-js-host-{}", NEXT_HOST.fetch_add(1, Ordering::Relaxed));
        host.set_id(&id);
        gloo_utils::body().append_child(&host).unwrap();
        format!("#{id}")
    }

    /// Config object with a bold-only toolbar and the given `plugins`.
    fn config_with_plugins(plugins: &js_sys::Array) -> JsValue {
        let config = js_sys::Object::new();
        let toolbar = js_sys::Array::of1(&JsValue::from_str("bold"));
        js_sys::Reflect::set(&config, &JsValue::from_str("toolbar"), &toolbar).unwrap();
        js_sys::Reflect::set(&config, &JsValue::from_str("plugins"), plugins).unwrap();
        config.into()
    }

    fn new_editor(plugins: &js_sys::Array) -> VellumEditor {
        let selector = mount_host();
        VellumEditor::new(&selector, config_with_plugins(plugins))
            .unwrap_or_else(|_| panic!("editor construction failed"))
    }

    fn global_counter(name: &str) -> f64 {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    #[wasm_bindgen_test]
    fn test_plugin_object_init_called_with_editor() {
        let plugin = js_sys::Object::new();
        let init = js_sys::Function::new_with_args(
            "editor",
            "this.tagged = true; \
             editor.registerCommand('stampObject', function () { \
                 globalThis.vellumObjectHits = (globalThis.vellumObjectHits || 0) + 1; \
             });",
        );
        js_sys::Reflect::set(&plugin, &JsValue::from_str("init"), &init).unwrap();

        let editor = new_editor(&js_sys::Array::of1(&plugin));
        editor
            .execute_command("stampObject", None)
            .unwrap_or_else(|_| panic!("stampObject dispatch failed"));
        assert_eq!(global_counter("vellumObjectHits"), 1.0);

        // `init` ran with the plugin object itself as `this`.
        let tagged = js_sys::Reflect::get(&plugin, &JsValue::from_str("tagged")).unwrap();
        assert_eq!(tagged.as_bool(), Some(true));
    }

    #[wasm_bindgen_test]
    fn test_plugin_class_static_init_is_used() {
        let class = js_sys::eval(
            "(class { static init(editor) { \
                 editor.registerCommand('stampClass', function () { \
                     globalThis.vellumClassHits = (globalThis.vellumClassHits || 0) + 1; \
                 }); \
             } })",
        )
        .unwrap();

        let editor = new_editor(&js_sys::Array::of1(&class));
        editor
            .execute_command("stampClass", None)
            .unwrap_or_else(|_| panic!("stampClass dispatch failed"));
        assert_eq!(global_counter("vellumClassHits"), 1.0);
    }

    #[wasm_bindgen_test]
    fn test_plugin_bare_function_still_applies() {
        let plugin =
            js_sys::Function::new_with_args("editor", "editor.setContent('<p>from-function</p>');");

        let editor = new_editor(&js_sys::Array::of1(&plugin));
        assert!(editor.get_content().contains("from-function"));
    }

    #[wasm_bindgen_test]
    fn test_non_callable_plugin_entries_are_skipped() {
        let follower = js_sys::Object::new();
        let init = js_sys::Function::new_with_args(
            "editor",
            "editor.registerCommand('stampAfterSkip', function () { \
                 globalThis.vellumSkipHits = (globalThis.vellumSkipHits || 0) + 1; \
             });",
        );
        js_sys::Reflect::set(&follower, &JsValue::from_str("init"), &init).unwrap();

        let plugins = js_sys::Array::new();
        plugins.push(&JsValue::from_f64(42.0));
        plugins.push(&js_sys::Object::new());
        plugins.push(&follower);

        let editor = new_editor(&plugins);
        editor
            .execute_command("stampAfterSkip", None)
            .unwrap_or_else(|_| panic!("stampAfterSkip dispatch failed"));
        assert_eq!(global_counter("vellumSkipHits"), 1.0);
    }
}
