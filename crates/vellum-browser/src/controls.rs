//! Toolbar DOM construction.
//!
//! Renders a resolved [`ToolbarModel`] into a panel of `<button>` and
//! `<select>` elements and wires each control to command dispatch. One
//! control per configured identifier, in configuration order.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use vellum_core::{CommandError, CommandRegistry, ToolKind, ToolbarModel};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::editor::EditorError;
use crate::surface::DomSurface;

/// A rendered toolbar: the panel element plus the listeners keeping its
/// controls live. Dropping this detaches every control handler.
pub(crate) struct ToolbarDom {
    pub panel: Element,
    pub listeners: Vec<EventListener>,
}

/// Dispatch a control's command, swallowing the result.
///
/// An unknown command was already reported by the registry; other failures
/// are logged here. Either way the surface stays usable, so control
/// handlers never propagate errors.
fn dispatch(
    registry: &Rc<RefCell<CommandRegistry<DomSurface>>>,
    surface: &mut DomSurface,
    command: &str,
    value: Option<&str>,
) {
    tracing::debug!(command, "dispatching toolbar command");
    let result = match registry.try_borrow_mut() {
        Ok(mut registry) => registry.execute(surface, command, value),
        Err(_) => {
            tracing::error!(command, "reentrant command dispatch rejected");
            return;
        }
    };
    if let Err(error) = result {
        if !matches!(error, CommandError::NotFound(_)) {
            tracing::warn!(command, %error, "command dispatch failed");
        }
    }
}

/// Build the toolbar panel for `model`.
///
/// Buttons carry their command in `data-command` (the synchronizer finds
/// them by it). Selectors dispatch their command with the chosen option's
/// value on `change`. Every handler calls `preventDefault` before
/// dispatching so a control inside a host form cannot trigger form
/// behavior on top of the formatting command.
pub(crate) fn render_toolbar(
    document: &Document,
    model: &ToolbarModel,
    registry: &Rc<RefCell<CommandRegistry<DomSurface>>>,
    surface: &DomSurface,
) -> Result<ToolbarDom, EditorError> {
    let panel = document.create_element("div").map_err(EditorError::dom)?;
    panel
        .class_list()
        .add_1("vellum-toolbar")
        .map_err(EditorError::dom)?;

    let mut listeners = Vec::with_capacity(model.len());
    for control in model.controls() {
        match &control.spec.kind {
            ToolKind::Button { command, .. } => {
                let button = document
                    .create_element("button")
                    .map_err(EditorError::dom)?;
                button
                    .set_attribute("type", "button")
                    .map_err(EditorError::dom)?;
                button
                    .set_attribute("data-command", command)
                    .map_err(EditorError::dom)?;
                button
                    .set_attribute("title", &control.spec.tooltip)
                    .map_err(EditorError::dom)?;
                if let Some(icon) = &control.spec.icon {
                    button.set_inner_html(&format!("<i class=\"bi {icon}\"></i>"));
                }

                let listener = {
                    let registry = Rc::clone(registry);
                    let mut surface = surface.clone();
                    let command = command.clone();
                    EventListener::new_with_options(
                        &button,
                        "click",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            event.prevent_default();
                            dispatch(&registry, &mut surface, &command, None);
                        },
                    )
                };
                listeners.push(listener);
                panel.append_child(&button).map_err(EditorError::dom)?;
            }
            ToolKind::Select { command, options } => {
                let select = document
                    .create_element("select")
                    .map_err(EditorError::dom)?;
                select
                    .set_attribute("title", &control.spec.tooltip)
                    .map_err(EditorError::dom)?;
                for option in options {
                    let entry = document
                        .create_element("option")
                        .map_err(EditorError::dom)?;
                    entry
                        .set_attribute("value", &option.value)
                        .map_err(EditorError::dom)?;
                    entry.set_text_content(Some(&option.label));
                    select.append_child(&entry).map_err(EditorError::dom)?;
                }

                let listener = {
                    let registry = Rc::clone(registry);
                    let mut surface = surface.clone();
                    let command = command.clone();
                    EventListener::new_with_options(
                        &select,
                        "change",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            event.prevent_default();
                            let Some(target) = event.target() else {
                                return;
                            };
                            let Ok(select) = target.dyn_into::<HtmlSelectElement>() else {
                                return;
                            };
                            dispatch(&registry, &mut surface, &command, Some(&select.value()));
                        },
                    )
                };
                listeners.push(listener);
                panel.append_child(&select).map_err(EditorError::dom)?;
            }
        }
    }

    Ok(ToolbarDom { panel, listeners })
}
