//! Async file loading for image upload.

use vellum_core::{EditSurface, SurfaceError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::surface::DomSurface;

/// Read `file` as a `data:` URL on a spawned task and append it to
/// `surface` as an `<img>`. Failures are logged and insert nothing.
pub(crate) fn append_image(mut surface: DomSurface, file: File) {
    wasm_bindgen_futures::spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(data_url) => {
                surface.append_html(&format!("<img src=\"{data_url}\">"));
            }
            Err(error) => tracing::warn!(%error, "image upload failed"),
        }
    });
}

/// Read `file` and return its contents as a `data:` URL.
///
/// Wraps `FileReader.readAsDataURL` in a future; resolves once the load
/// event fires.
pub async fn read_as_data_url(file: &File) -> Result<String, SurfaceError> {
    let reader =
        FileReader::new().map_err(|err| SurfaceError(format!("FileReader unavailable: {err:?}")))?;

    // Wait for the reader to finish
    let done = {
        let reader = reader.clone();
        js_sys::Promise::new(&mut |resolve, reject| {
            let onload = Closure::wrap(Box::new(move || {
                resolve.call0(&JsValue::NULL).ok();
            }) as Box<dyn FnMut()>);
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            let onerror = Closure::wrap(Box::new(move || {
                reject.call0(&JsValue::NULL).ok();
            }) as Box<dyn FnMut()>);
            reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();
        })
    };

    reader
        .read_as_data_url(file)
        .map_err(|err| SurfaceError(format!("readAsDataURL failed: {err:?}")))?;
    JsFuture::from(done)
        .await
        .map_err(|_| SurfaceError(format!("reading {} failed", file.name())))?;

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| SurfaceError("file read produced no data URL".to_string()))
}
