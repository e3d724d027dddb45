//! Plugin application.
//!
//! Plugins are externally authored extensions applied exactly once while an
//! editor is being built. Each plugin receives a [`SetupContext`] through
//! which it registers commands and catalog tools; a plugin that fails to
//! initialize is logged and skipped without disturbing the plugins around
//! it or the editor itself.

use smol_str::SmolStr;
use thiserror::Error;

use crate::catalog::{ToolCatalog, ToolSpec};
use crate::command::{CommandRegistry, CommandResult};

/// Error raised by a plugin's initialization.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct PluginError(pub String);

impl From<&str> for PluginError {
    fn from(s: &str) -> Self {
        PluginError(s.to_string())
    }
}

impl From<String> for PluginError {
    fn from(s: String) -> Self {
        PluginError(s)
    }
}

/// Registration access handed to each plugin while it initializes.
///
/// This is the plugin-facing facet of the editor under construction:
/// commands land in the instance's registry and tools in its catalog, so a
/// toolbar built afterwards can reference plugin-contributed identifiers.
pub struct SetupContext<'a, S> {
    registry: &'a mut CommandRegistry<S>,
    catalog: &'a mut ToolCatalog,
}

impl<'a, S> SetupContext<'a, S> {
    pub fn new(registry: &'a mut CommandRegistry<S>, catalog: &'a mut ToolCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Register a command action; replaces any existing action of the
    /// same name, built-ins included.
    pub fn register_command<F>(&mut self, name: impl Into<SmolStr>, action: F)
    where
        F: FnMut(&mut S, Option<&str>) -> CommandResult + 'static,
    {
        self.registry.register(name, action);
    }

    /// Define (or redefine) a toolbar tool.
    pub fn register_tool(&mut self, id: impl Into<SmolStr>, spec: ToolSpec) {
        self.catalog.insert(id, spec);
    }
}

/// An externally authored editor extension.
pub trait EditorPlugin<S> {
    /// Stable name used in diagnostics and failure reports.
    fn name(&self) -> &str;

    /// Called once during editor construction with registration access.
    fn init(&self, ctx: &mut SetupContext<'_, S>) -> Result<(), PluginError>;
}

/// Record of a plugin whose initialization failed.
#[derive(Debug)]
pub struct PluginFailure {
    pub plugin: SmolStr,
    pub error: PluginError,
}

/// Apply `plugins` in the order given.
///
/// Registrations a plugin completed before failing are kept; the failure is
/// logged and recorded, and application continues with the next plugin.
/// Returns the failures, empty when every plugin initialized.
pub fn apply_plugins<S>(
    plugins: &[Box<dyn EditorPlugin<S>>],
    registry: &mut CommandRegistry<S>,
    catalog: &mut ToolCatalog,
) -> Vec<PluginFailure> {
    let mut failures = Vec::new();
    let mut ctx = SetupContext::new(registry, catalog);
    for plugin in plugins {
        match plugin.init(&mut ctx) {
            Ok(()) => tracing::trace!(plugin = plugin.name(), "plugin initialized"),
            Err(error) => {
                tracing::error!(plugin = plugin.name(), %error, "plugin initialization failed");
                failures.push(PluginFailure {
                    plugin: plugin.name().into(),
                    error,
                });
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct RecordingPlugin {
        name: &'static str,
        fail: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl EditorPlugin<()> for RecordingPlugin {
        fn name(&self) -> &str {
            self.name
        }

        fn init(&self, ctx: &mut SetupContext<'_, ()>) -> Result<(), PluginError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                return Err(PluginError::from("setup exploded"));
            }
            ctx.register_command(self.name, |_surface, _value| Ok(()));
            Ok(())
        }
    }

    fn plugin(
        name: &'static str,
        fail: bool,
        log: &Rc<RefCell<Vec<&'static str>>>,
    ) -> Box<dyn EditorPlugin<()>> {
        Box::new(RecordingPlugin {
            name,
            fail,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_plugins_run_in_configured_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let plugins = vec![
            plugin("alpha", false, &log),
            plugin("beta", false, &log),
            plugin("gamma", false, &log),
        ];
        let mut registry = CommandRegistry::new();
        let mut catalog = ToolCatalog::empty();

        let failures = apply_plugins(&plugins, &mut registry, &mut catalog);

        assert!(failures.is_empty());
        assert_eq!(*log.borrow(), ["alpha", "beta", "gamma"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_failing_plugin_is_isolated() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let plugins = vec![
            plugin("first", false, &log),
            plugin("broken", true, &log),
            plugin("last", false, &log),
        ];
        let mut registry = CommandRegistry::new();
        let mut catalog = ToolCatalog::empty();

        let failures = apply_plugins(&plugins, &mut registry, &mut catalog);

        // Every plugin still ran, only the broken one is reported.
        assert_eq!(*log.borrow(), ["first", "broken", "last"]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].plugin, "broken");
        assert!(registry.contains("first"));
        assert!(registry.contains("last"));
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_plugin_can_extend_catalog_and_registry() {
        struct EmojiPlugin;

        impl EditorPlugin<()> for EmojiPlugin {
            fn name(&self) -> &str {
                "emoji"
            }

            fn init(&self, ctx: &mut SetupContext<'_, ()>) -> Result<(), PluginError> {
                ctx.register_command("insertEmoji", |_surface, _value| Ok(()));
                ctx.register_tool(
                    "emoji",
                    ToolSpec::button("insertEmoji", "bi-emoji-smile", "Emoji"),
                );
                Ok(())
            }
        }

        let plugins: Vec<Box<dyn EditorPlugin<()>>> = vec![Box::new(EmojiPlugin)];
        let mut registry = CommandRegistry::new();
        let mut catalog = ToolCatalog::empty();

        apply_plugins(&plugins, &mut registry, &mut catalog);

        assert!(registry.contains("insertEmoji"));
        assert!(catalog.contains("emoji"));
        registry.execute(&mut (), "insertEmoji", None).unwrap();
    }

    #[test]
    fn test_plugin_overrides_builtin_command() {
        struct OverridePlugin {
            hits: Rc<RefCell<u32>>,
        }

        impl EditorPlugin<()> for OverridePlugin {
            fn name(&self) -> &str {
                "override"
            }

            fn init(&self, ctx: &mut SetupContext<'_, ()>) -> Result<(), PluginError> {
                let hits = Rc::clone(&self.hits);
                ctx.register_command("bold", move |_surface, _value| {
                    *hits.borrow_mut() += 1;
                    Ok(())
                });
                Ok(())
            }
        }

        let hits = Rc::new(RefCell::new(0));
        let plugins: Vec<Box<dyn EditorPlugin<()>>> = vec![Box::new(OverridePlugin {
            hits: Rc::clone(&hits),
        })];
        let mut registry = CommandRegistry::new();
        registry.register("bold", |_surface, _value| Ok(()));
        let mut catalog = ToolCatalog::empty();

        apply_plugins(&plugins, &mut registry, &mut catalog);
        registry.execute(&mut (), "bold", None).unwrap();

        assert_eq!(*hits.borrow(), 1, "last registration must win");
    }
}
