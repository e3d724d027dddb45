//! Selection-state synchronization.
//!
//! Listens for `selectionchange` and mirrors the selection's formatting
//! state onto the owning toolbar's toggle buttons via the `active` class.
//! The subscription is scoped: a selection outside the editor's own region
//! leaves the toolbar untouched, so several editors on one page never fight
//! over each other's controls.

use gloo_events::EventListener;
use smol_str::SmolStr;
use vellum_core::{EditSurface, sync_plan};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::surface::DomSurface;

/// Live selection subscription for one editor.
///
/// Dropping it detaches the `selectionchange` handler, so a discarded
/// editor stops touching the page.
pub(crate) struct SelectionSync {
    _listener: EventListener,
}

/// Subscribe `panel` to selection changes inside `root`.
pub(crate) fn attach(
    document: &Document,
    root: &HtmlElement,
    panel: &Element,
    monitored: Vec<SmolStr>,
    surface: DomSurface,
) -> SelectionSync {
    let handler_document = document.clone();
    let root = root.clone();
    let panel = panel.clone();

    let listener = EventListener::new(document, "selectionchange", move |_event| {
        let selection = match handler_document.get_selection() {
            Ok(Some(selection)) => selection,
            _ => return,
        };
        let anchor = selection.anchor_node();
        if !root.contains(anchor.as_ref()) {
            // Selection lives elsewhere on the page; keep the last state.
            return;
        }
        refresh_toolbar_state(&panel, &monitored, &surface);
    });

    SelectionSync {
        _listener: listener,
    }
}

/// Recompute and apply the `active` class for every monitored command.
///
/// Buttons are looked up inside `panel` only. A monitored command without
/// a matching button (the host pulled it out of the DOM, or a plugin
/// redefined the tool) is reported and skipped.
pub(crate) fn refresh_toolbar_state(panel: &Element, monitored: &[SmolStr], surface: &DomSurface) {
    let plan = sync_plan(monitored, |command| surface.query_state(command));
    for state in plan {
        let selector = format!("button[data-command=\"{}\"]", state.command);
        let Ok(buttons) = panel.query_selector_all(&selector) else {
            tracing::warn!(command = %state.command, "toolbar lookup failed");
            continue;
        };
        if buttons.length() == 0 {
            tracing::warn!(command = %state.command, "toolbar control not found");
            continue;
        }
        for index in 0..buttons.length() {
            let Some(node) = buttons.get(index) else {
                continue;
            };
            let Some(button) = node.dyn_ref::<Element>() else {
                continue;
            };
            let class_list = button.class_list();
            if state.active {
                let _ = class_list.add_1("active");
            } else {
                let _ = class_list.remove_1("active");
            }
        }
    }
}
