//! Standard plugins.
//!
//! Each plugin contributes one command beyond the built-in formatting set.
//! They ship with the widget but go through the same [`EditorPlugin`]
//! machinery as host-authored plugins: applied in order, isolated on
//! failure, free to override anything registered before them.

use vellum_core::{EditSurface, EditorPlugin, PluginError, SetupContext, SurfaceError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::surface::DomSurface;
use crate::upload;

/// Ask the user for a line of input; `None` when cancelled or left empty.
fn prompt(message: &str, default: Option<&str>) -> Option<String> {
    let window = web_sys::window()?;
    let response = match default {
        Some(default) => window.prompt_with_message_and_default(message, default),
        None => window.prompt_with_message(message),
    };
    response.ok().flatten().filter(|input| !input.is_empty())
}

/// Strikethrough formatting for the current selection.
pub struct StrikeThroughPlugin;

impl EditorPlugin<DomSurface> for StrikeThroughPlugin {
    fn name(&self) -> &str {
        "strikethrough"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("strikethrough", |surface: &mut DomSurface, _value| {
            surface.exec("strikeThrough", None)?;
            Ok(())
        });
        Ok(())
    }
}

/// Background color for the current selection, color asked per use.
pub struct HighlightPlugin;

impl EditorPlugin<DomSurface> for HighlightPlugin {
    fn name(&self) -> &str {
        "highlight"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("highlight", |surface: &mut DomSurface, _value| {
            let Some(color) = prompt("Enter highlight color (e.g., yellow)", None) else {
                return Ok(());
            };
            surface.exec("hiliteColor", Some(&color))?;
            Ok(())
        });
        Ok(())
    }
}

/// Turn the current selection into a hyperlink.
pub struct InsertLinkPlugin;

impl EditorPlugin<DomSurface> for InsertLinkPlugin {
    fn name(&self) -> &str {
        "insertLink"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("insertLink", |surface: &mut DomSurface, _value| {
            let Some(url) = prompt("Enter the URL:", Some("https://")) else {
                return Ok(());
            };
            surface.exec("createLink", Some(&url))?;
            Ok(())
        });
        Ok(())
    }
}

/// Strip link markup from the current selection.
pub struct RemoveLinkPlugin;

impl EditorPlugin<DomSurface> for RemoveLinkPlugin {
    fn name(&self) -> &str {
        "removeLink"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("removeLink", |surface: &mut DomSurface, _value| {
            surface.exec("unlink", None)?;
            Ok(())
        });
        Ok(())
    }
}

/// Insert an image from a URL at the current selection.
pub struct InsertImagePlugin;

impl EditorPlugin<DomSurface> for InsertImagePlugin {
    fn name(&self) -> &str {
        "insertImage"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("insertImage", |surface: &mut DomSurface, _value| {
            let Some(url) = prompt("Enter the image URL:", Some("https://")) else {
                return Ok(());
            };
            surface.exec("insertImage", Some(&url))?;
            Ok(())
        });
        Ok(())
    }
}

/// Pick a local image file and append it to the editor as a `data:` URL.
pub struct UploadImagePlugin;

impl EditorPlugin<DomSurface> for UploadImagePlugin {
    fn name(&self) -> &str {
        "uploadImage"
    }

    fn init(&self, ctx: &mut SetupContext<'_, DomSurface>) -> Result<(), PluginError> {
        ctx.register_command("uploadImage", |surface: &mut DomSurface, _value| {
            let picker: HtmlInputElement = surface
                .document()
                .create_element("input")
                .map_err(|err| SurfaceError(format!("cannot create file input: {err:?}")))?
                .dyn_into()
                .map_err(|_| SurfaceError("file input cast failed".to_string()))?;
            picker.set_type("file");
            picker.set_accept("image/*");

            // File arrives asynchronously; the handler owns its own surface
            // handle so the upload outlives this dispatch.
            let surface = surface.clone();
            let input = picker.clone();
            let onchange = Closure::wrap(Box::new(move || {
                let Some(files) = input.files() else {
                    return;
                };
                let Some(file) = files.get(0) else {
                    return;
                };
                upload::append_image(surface.clone(), file);
            }) as Box<dyn FnMut()>);
            picker.set_onchange(Some(onchange.as_ref().unchecked_ref()));
            onchange.forget();

            picker.click();
            Ok(())
        });
        Ok(())
    }
}

/// The plugin set shipped with the widget, in application order.
pub fn standard_plugins() -> Vec<Box<dyn EditorPlugin<DomSurface>>> {
    vec![
        Box::new(StrikeThroughPlugin),
        Box::new(HighlightPlugin),
        Box::new(InsertLinkPlugin),
        Box::new(RemoveLinkPlugin),
        Box::new(InsertImagePlugin),
        Box::new(UploadImagePlugin),
    ]
}
