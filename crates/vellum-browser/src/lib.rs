//! Browser DOM layer for the vellum editing widget.
//!
//! This crate binds the platform-free logic from `vellum-core` to a
//! `contenteditable` element: toolbar rendering, command dispatch through
//! `execCommand`, scoped selection tracking, and the standard plugin set.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `editor`: instance assembly and the public `Editor` handle
//! - `surface`: `EditSurface` implementation over the DOM
//! - `controls`: toolbar control rendering and dispatch wiring
//! - `selection`: `selectionchange` subscription and active-state sync
//! - `stylesheet`: page-wide icon stylesheet injection
//! - `plugins`: standard plugins (strikethrough, highlight, links, images)
//! - `upload`: async file reading for image upload
//!
//! # Re-exports
//!
//! This crate re-exports `vellum-core` for convenience, so consumers only
//! need to depend on `vellum-browser`.

// Re-export core crate
pub use vellum_core;
pub use vellum_core::*;

pub mod editor;
pub mod plugins;
pub mod stylesheet;
pub mod surface;
pub mod upload;

mod controls;
mod selection;

pub use editor::{Editor, EditorError};
pub use plugins::{
    HighlightPlugin, InsertImagePlugin, InsertLinkPlugin, RemoveLinkPlugin, StrikeThroughPlugin,
    UploadImagePlugin, standard_plugins,
};
pub use surface::DomSurface;
