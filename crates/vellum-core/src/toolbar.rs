//! Toolbar model construction.
//!
//! Resolves an ordered list of tool identifiers against the [`ToolCatalog`]
//! into an ordered list of controls. Resolution is strict: an identifier
//! without a catalog definition is a configuration error surfaced to the
//! caller, not a control silently dropped at render time.

use smol_str::SmolStr;
use thiserror::Error;

use crate::catalog::{ToolCatalog, ToolSpec};

/// Errors from resolving the editor configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The toolbar names a tool the catalog does not define.
    #[error("unknown toolbar tool: {0}")]
    UnknownTool(SmolStr),
}

/// One resolved toolbar control: the configured identifier plus its
/// catalog definition at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolControl {
    pub id: SmolStr,
    pub spec: ToolSpec,
}

/// Ordered, resolved toolbar.
///
/// Purely descriptive; the browser layer walks [`controls`](Self::controls)
/// to render DOM elements in the same order.
#[derive(Debug, Clone, Default)]
pub struct ToolbarModel {
    controls: Vec<ToolControl>,
}

impl ToolbarModel {
    /// Resolve `ids` against `catalog`, preserving order and duplicates.
    ///
    /// Every identifier must have a catalog definition; the first unknown
    /// identifier aborts resolution with [`ConfigError::UnknownTool`]. An
    /// empty list resolves to an empty toolbar.
    pub fn build<T: AsRef<str>>(catalog: &ToolCatalog, ids: &[T]) -> Result<Self, ConfigError> {
        let mut controls = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let Some(spec) = catalog.get(id) else {
                tracing::error!(tool = id, "toolbar references unknown tool");
                return Err(ConfigError::UnknownTool(id.into()));
            };
            controls.push(ToolControl {
                id: id.into(),
                spec: spec.clone(),
            });
        }
        Ok(Self { controls })
    }

    /// Resolved controls in configuration order.
    pub fn controls(&self) -> &[ToolControl] {
        &self.controls
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the toolbar has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolKind;

    #[test]
    fn test_build_preserves_order_and_count() {
        let catalog = ToolCatalog::builtin();
        let ids = ["bold", "italic", "headingSelector", "undo"];
        let model = ToolbarModel::build(&catalog, &ids).unwrap();

        assert_eq!(model.len(), ids.len());
        let resolved: Vec<_> = model.controls().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(resolved, ids);
    }

    #[test]
    fn test_build_empty_list_is_empty_toolbar() {
        let catalog = ToolCatalog::builtin();
        let model = ToolbarModel::build::<&str>(&catalog, &[]).unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_build_keeps_duplicates() {
        let catalog = ToolCatalog::builtin();
        let model = ToolbarModel::build(&catalog, &["bold", "bold"]).unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.controls()[0], model.controls()[1]);
    }

    #[test]
    fn test_build_rejects_unknown_tool() {
        let catalog = ToolCatalog::builtin();
        let err = ToolbarModel::build(&catalog, &["bold", "sparkles"]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownTool("sparkles".into()));
    }

    #[test]
    fn test_build_sees_plugin_contributed_tools() {
        let mut catalog = ToolCatalog::builtin();
        catalog.insert(
            "emoji",
            ToolSpec::button("insertEmoji", "bi-emoji-smile", "Emoji"),
        );
        let model = ToolbarModel::build(&catalog, &["emoji"]).unwrap();
        assert!(matches!(
            &model.controls()[0].spec.kind,
            ToolKind::Button { command, .. } if command == "insertEmoji"
        ));
    }
}
