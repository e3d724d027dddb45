//! vellum-core: Pure Rust widget logic without platform dependencies.
//!
//! This crate provides:
//! - `EditSurface` trait abstracting the host editing region
//! - `CommandRegistry<S>` - named editing commands, generic over the surface
//! - `ToolCatalog` / `ToolbarModel` - tool definitions and strict toolbar
//!   resolution
//! - `EditorPlugin<S>` and ordered, failure-isolated plugin application
//! - Selection-state planning for toolbar toggle controls

pub mod catalog;
pub mod command;
pub mod config;
pub mod plugin;
pub mod surface;
pub mod sync;
pub mod toolbar;

pub use catalog::{SelectOption, ToolCatalog, ToolKind, ToolSpec};
pub use command::{
    CommandError, CommandFn, CommandRegistry, CommandResult, register_builtin_commands,
};
pub use config::{DEFAULT_HEIGHT, DEFAULT_PLACEHOLDER, EditorConfig};
pub use plugin::{EditorPlugin, PluginError, PluginFailure, SetupContext, apply_plugins};
pub use smol_str::SmolStr;
pub use surface::{EditSurface, SurfaceError};
pub use sync::{ControlState, monitored_commands, sync_plan};
pub use toolbar::{ConfigError, ToolControl, ToolbarModel};
