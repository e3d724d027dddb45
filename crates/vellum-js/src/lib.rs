//! WASM bindings for the vellum editor widget.
//!
//! Exposes [`VellumEditor`] for JavaScript/TypeScript apps: construct one
//! over an existing element and the toolbar, command registry, and selection
//! tracking come with it.

mod config;
mod editor;

pub use config::*;
pub use editor::*;

use wasm_bindgen::prelude::*;

/// Initialize panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host page may have installed its own subscriber already
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
