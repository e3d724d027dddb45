//! Command registry and dispatch.
//!
//! Every editing action the widget can perform is a named command. Built-in
//! formatting commands and plugin-contributed commands live in the same
//! [`CommandRegistry`], so a plugin can override a built-in by registering
//! under the same name (last registration wins).

use std::collections::HashMap;

use smol_str::SmolStr;
use thiserror::Error;

use crate::surface::{EditSurface, SurfaceError};

/// Errors from command dispatch.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CommandError {
    /// No command is registered under the requested name.
    #[error("unknown command: {0}")]
    NotFound(SmolStr),

    /// The editing surface rejected the underlying action.
    #[error("surface rejected command: {0}")]
    Surface(#[from] SurfaceError),

    /// Command-specific failure, reported by the action itself.
    #[error("{0}")]
    Failed(String),
}

/// Result alias for command actions.
pub type CommandResult = Result<(), CommandError>;

/// A registered command action, boxed for storage in the registry.
///
/// Actions receive the editing surface and the optional dispatch value
/// (selector controls pass their selected option, buttons pass `None`).
pub type CommandFn<S> = Box<dyn FnMut(&mut S, Option<&str>) -> CommandResult>;

/// Named registry of command actions.
///
/// Generic over the surface type so the orchestration layer can be exercised
/// against a recording double while the browser crate plugs in the DOM.
pub struct CommandRegistry<S> {
    commands: HashMap<SmolStr, CommandFn<S>>,
}

impl<S> CommandRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register `action` under `name`.
    ///
    /// Registering a name that already exists replaces the stored action;
    /// the displaced action is never invoked again.
    pub fn register<F>(&mut self, name: impl Into<SmolStr>, action: F)
    where
        F: FnMut(&mut S, Option<&str>) -> CommandResult + 'static,
    {
        let name = name.into();
        if self.commands.contains_key(&name) {
            tracing::trace!(command = %name, "replacing registered command");
        }
        self.commands.insert(name, Box::new(action));
    }

    /// Whether a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Names of all registered commands, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.commands.keys()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatch the command registered under `name`.
    ///
    /// A missing name is a recoverable condition: it is logged here and
    /// reported as [`CommandError::NotFound`], and the surface is left
    /// untouched. Callers that treat dispatch as fire-and-forget can drop
    /// the error knowing the diagnostic is already emitted.
    pub fn execute(&mut self, surface: &mut S, name: &str, value: Option<&str>) -> CommandResult {
        let Some(action) = self.commands.get_mut(name) else {
            tracing::error!(command = name, "command not found in registry");
            return Err(CommandError::NotFound(name.into()));
        };
        action(surface, value)
    }
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

// === Built-in commands ===

/// Built-in commands that toggle or apply formatting with no argument.
const PLAIN_COMMANDS: &[&str] = &[
    "bold",
    "italic",
    "underline",
    "justifyLeft",
    "justifyCenter",
    "justifyRight",
    "insertUnorderedList",
    "insertOrderedList",
    "indent",
    "outdent",
    "undo",
    "redo",
];

/// Built-in commands that forward the dispatch value to the surface.
const VALUE_COMMANDS: &[&str] = &["formatBlock", "fontName"];

/// Register the standard formatting commands.
///
/// Covers the text toggles (`bold`, `italic`, `underline`), paragraph
/// alignment, list and indent handling, history (`undo`, `redo`), and the
/// two parameterized commands backing the selector controls (`formatBlock`,
/// `fontName`). Runs before plugin application so plugins may override any
/// of these.
pub fn register_builtin_commands<S: EditSurface>(registry: &mut CommandRegistry<S>) {
    for &name in PLAIN_COMMANDS {
        registry.register(name, move |surface: &mut S, _value| {
            surface.exec(name, None)?;
            Ok(())
        });
    }
    for &name in VALUE_COMMANDS {
        registry.register(name, move |surface: &mut S, value| {
            surface.exec(name, value)?;
            Ok(())
        });
    }
}
