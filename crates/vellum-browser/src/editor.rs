//! Editor assembly and instance API.
//!
//! [`Editor::create`] turns a host element into an editing widget: it makes
//! the element editable, mounts a toolbar above it, registers built-in and
//! plugin commands, and subscribes the toolbar to selection state. The
//! returned handle owns every listener, so dropping it detaches the widget
//! from the page (the host element and its content stay).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use smol_str::SmolStr;
use thiserror::Error;
use vellum_core::{
    CommandError, CommandRegistry, CommandResult, ConfigError, DEFAULT_HEIGHT, EditorConfig,
    EditorPlugin, PluginFailure, ToolCatalog, ToolbarModel, apply_plugins, monitored_commands,
    register_builtin_commands,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, File, HtmlDocument, HtmlElement};

use crate::controls::{ToolbarDom, render_toolbar};
use crate::selection::{self, SelectionSync};
use crate::surface::DomSurface;
use crate::{plugins, stylesheet, upload};

/// Errors from editor construction and instance operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EditorError {
    /// No element on the page matches the configured selector.
    #[error("editor element not found: {0}")]
    TargetNotFound(String),

    /// The configuration references tools that do not exist.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM operation failed while assembling the widget.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl EditorError {
    pub(crate) fn dom(err: JsValue) -> Self {
        EditorError::Dom(format!("{err:?}"))
    }
}

/// Track the `empty` marker class used for placeholder styling.
pub(crate) fn refresh_empty_class(element: &HtmlElement) {
    let class_list = element.class_list();
    let result = if element.inner_text().trim().is_empty() {
        class_list.add_1("empty")
    } else {
        class_list.remove_1("empty")
    };
    if let Err(err) = result {
        tracing::warn!(?err, "failed to toggle empty marker");
    }
}

/// One live editing widget.
///
/// All methods take `&self`: the editor's mutable state is the DOM itself
/// plus the shared command registry, so instances can sit behind `Rc` and
/// be reached from event handlers and host bindings alike.
pub struct Editor {
    element: HtmlElement,
    panel: Element,
    surface: DomSurface,
    registry: Rc<RefCell<CommandRegistry<DomSurface>>>,
    config: EditorConfig,
    monitored: Vec<SmolStr>,
    plugin_failures: Vec<PluginFailure>,
    _toolbar_listeners: Vec<EventListener>,
    _input_listener: EventListener,
    _selection: SelectionSync,
}

impl Editor {
    /// Build an editor on the first element matching `selector`.
    ///
    /// Construction order matters: built-in commands land first, then
    /// `plugins` run in order (failures are isolated and reported via
    /// [`plugin_failures`](Self::plugin_failures)), and only then is the
    /// toolbar resolved, so plugin-contributed tools are valid toolbar
    /// identifiers. The configuration is fully validated before the first
    /// DOM write, so a failed construction leaves the page as it was. The
    /// toolbar panel is inserted directly above the editable element.
    pub fn create(
        selector: &str,
        config: EditorConfig,
        plugins: Vec<Box<dyn EditorPlugin<DomSurface>>>,
    ) -> Result<Self, EditorError> {
        let window =
            web_sys::window().ok_or_else(|| EditorError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| EditorError::Dom("no document".to_string()))?;

        let element = document
            .query_selector(selector)
            .map_err(EditorError::dom)?
            .ok_or_else(|| EditorError::TargetNotFound(selector.to_string()))?;
        let element: HtmlElement = element.dyn_into().map_err(|_| {
            EditorError::Dom(format!("element for {selector:?} is not an HTMLElement"))
        })?;
        // execCommand and queryCommandState live on HtmlDocument.
        let html_document: HtmlDocument = document.clone().dyn_into().map_err(|_| {
            EditorError::Dom("document does not support editing commands".to_string())
        })?;

        // Resolve commands, plugins, and the toolbar before the first DOM
        // write; a rejected configuration leaves the host untouched.
        let mut registry = CommandRegistry::new();
        register_builtin_commands(&mut registry);
        let mut catalog = ToolCatalog::builtin();

        let plugin_failures = apply_plugins(&plugins, &mut registry, &mut catalog);

        let model = ToolbarModel::build(&catalog, &config.toolbar)?;
        let monitored = monitored_commands(&model);

        stylesheet::ensure_icon_stylesheet(&document)?;

        // The host element becomes the editing region.
        element.set_content_editable("true");
        element
            .class_list()
            .add_1("vellum-editor")
            .map_err(EditorError::dom)?;
        element
            .set_attribute("data-placeholder", config.placeholder_text())
            .map_err(EditorError::dom)?;
        let style = element.style();
        let _ = style.set_property("height", config.height.as_deref().unwrap_or(DEFAULT_HEIGHT));
        if let Some(width) = &config.width {
            let _ = style.set_property("width", width);
        }

        let surface = DomSurface::new(html_document, element.clone());

        refresh_empty_class(&element);
        let input_listener = {
            let element = element.clone();
            EventListener::new(&element.clone(), "input", move |_event| {
                refresh_empty_class(&element);
            })
        };

        let registry = Rc::new(RefCell::new(registry));
        let ToolbarDom { panel, listeners } =
            render_toolbar(&document, &model, &registry, &surface)?;
        element
            .before_with_node_1(&panel)
            .map_err(EditorError::dom)?;

        let selection_sync =
            selection::attach(&document, &element, &panel, monitored.clone(), surface.clone());

        tracing::debug!(
            selector,
            controls = model.len(),
            failed_plugins = plugin_failures.len(),
            "editor created"
        );

        Ok(Self {
            element,
            panel,
            surface,
            registry,
            config,
            monitored,
            plugin_failures,
            _toolbar_listeners: listeners,
            _input_listener: input_listener,
            _selection: selection_sync,
        })
    }

    /// Like [`create`](Self::create) but with the standard plugin set.
    pub fn create_with_standard_plugins(
        selector: &str,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        Self::create(selector, config, plugins::standard_plugins())
    }

    /// Current markup of the editable region.
    pub fn content(&self) -> String {
        self.element.inner_html()
    }

    /// Replace the editable region's markup.
    pub fn set_content(&self, markup: &str) {
        self.element.set_inner_html(markup);
        refresh_empty_class(&self.element);
    }

    /// Resize the editable region to a CSS height (e.g. `"500px"`).
    pub fn set_height(&self, dimension: &str) {
        let _ = self.element.style().set_property("height", dimension);
    }

    /// Resize the editable region to a CSS width.
    pub fn set_width(&self, dimension: &str) {
        let _ = self.element.style().set_property("width", dimension);
    }

    /// Dispatch a registered command by name.
    pub fn execute_command(&self, name: &str, value: Option<&str>) -> CommandResult {
        let mut surface = self.surface.clone();
        let mut registry = self
            .registry
            .try_borrow_mut()
            .map_err(|_| CommandError::Failed("reentrant command dispatch".to_string()))?;
        registry.execute(&mut surface, name, value)
    }

    /// Register (or replace) a command on this instance.
    pub fn register_command<F>(&self, name: impl Into<SmolStr>, action: F)
    where
        F: FnMut(&mut DomSurface, Option<&str>) -> CommandResult + 'static,
    {
        match self.registry.try_borrow_mut() {
            Ok(mut registry) => registry.register(name, action),
            Err(_) => tracing::error!("cannot register a command during dispatch"),
        }
    }

    /// Read `file` as a `data:` URL and append it to the region as an image.
    ///
    /// Fire-and-forget: the read runs on its own task, and a failed read is
    /// logged without inserting anything.
    pub fn insert_image_from_file(&self, file: &File) {
        upload::append_image(self.surface.clone(), file.clone());
    }

    /// Recompute toolbar toggle state from the current selection.
    pub fn refresh_toolbar_state(&self) {
        selection::refresh_toolbar_state(&self.panel, &self.monitored, &self.surface);
    }

    /// The configuration this editor was built from.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The editable region element.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// The toolbar panel element mounted above the region.
    pub fn toolbar(&self) -> &Element {
        &self.panel
    }

    /// Plugins that failed during construction, in application order.
    pub fn plugin_failures(&self) -> &[PluginFailure] {
        &self.plugin_failures
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("element", &self.element)
            .field("monitored", &self.monitored)
            .field("plugin_failures", &self.plugin_failures)
            .finish()
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        // Listeners detach on their own; the toolbar panel is ours to take
        // down. The host element and its content are left as they are.
        self.panel.remove();
    }
}
