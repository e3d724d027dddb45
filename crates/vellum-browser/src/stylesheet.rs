//! Icon stylesheet injection.
//!
//! Toolbar buttons render Bootstrap Icons glyphs, so the icon stylesheet
//! must be present on the page. Injection is page-wide and happens at most
//! once no matter how many editors are created: a process-global flag
//! short-circuits repeat calls, and the document is scanned first so a
//! host page that already links the stylesheet is left alone.

use std::cell::Cell;

use web_sys::Document;

use crate::editor::EditorError;

/// Stylesheet the toolbar icons come from.
pub const ICON_STYLESHEET_HREF: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons/font/bootstrap-icons.css";

thread_local! {
    static ICONS_LINKED: Cell<bool> = const { Cell::new(false) };
}

/// Make sure the icon stylesheet is linked into `document`.
pub fn ensure_icon_stylesheet(document: &Document) -> Result<(), EditorError> {
    if ICONS_LINKED.with(Cell::get) {
        return Ok(());
    }

    let selector = format!("link[href=\"{ICON_STYLESHEET_HREF}\"]");
    let already_linked = document
        .query_selector(&selector)
        .map_err(EditorError::dom)?
        .is_some();

    if !already_linked {
        let link = document.create_element("link").map_err(EditorError::dom)?;
        link.set_attribute("rel", "stylesheet")
            .map_err(EditorError::dom)?;
        link.set_attribute("href", ICON_STYLESHEET_HREF)
            .map_err(EditorError::dom)?;
        let head = document
            .head()
            .ok_or_else(|| EditorError::Dom("document has no <head>".to_string()))?;
        head.append_child(&link).map_err(EditorError::dom)?;
        tracing::debug!("icon stylesheet injected");
    }

    ICONS_LINKED.with(|linked| linked.set(true));
    Ok(())
}
