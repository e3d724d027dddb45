//! DOM-backed editing surface.
//!
//! Binds [`EditSurface`] to a `contenteditable` element and the document's
//! editing API (`execCommand` / `queryCommandState`).

use vellum_core::{EditSurface, SurfaceError};
use web_sys::{HtmlDocument, HtmlElement};

/// Editing surface over a `contenteditable` element.
///
/// The document is held as [`HtmlDocument`], the interface that carries
/// `execCommand` and `queryCommandState`. Both fields are cheap JS handles;
/// clones observe the same region, so every event closure can hold its own
/// copy.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: HtmlDocument,
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(document: HtmlDocument, element: HtmlElement) -> Self {
        Self { document, element }
    }

    /// Owning document of the editable region.
    pub fn document(&self) -> &HtmlDocument {
        &self.document
    }

    /// The editable region itself.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl EditSurface for DomSurface {
    fn exec(&mut self, command: &str, value: Option<&str>) -> Result<(), SurfaceError> {
        let applied = match value {
            Some(value) => self
                .document
                .exec_command_with_show_ui_and_value(command, false, value),
            None => self.document.exec_command(command),
        }
        .map_err(|err| SurfaceError(format!("execCommand {command} failed: {err:?}")))?;

        // false means the command was unsupported or disabled at the
        // current selection; the document is simply left unchanged.
        if !applied {
            tracing::trace!(command, "execCommand not applied");
        }
        Ok(())
    }

    fn query_state(&self, command: &str) -> bool {
        self.document.query_command_state(command).unwrap_or(false)
    }

    fn content(&self) -> String {
        self.element.inner_html()
    }

    fn set_content(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn append_html(&mut self, markup: &str) {
        if let Err(err) = self.element.insert_adjacent_html("beforeend", markup) {
            tracing::warn!(?err, "failed to append markup to editor");
        }
    }

    fn set_height(&mut self, dimension: &str) {
        let _ = self.element.style().set_property("height", dimension);
    }

    fn set_width(&mut self, dimension: &str) {
        let _ = self.element.style().set_property("width", dimension);
    }
}
