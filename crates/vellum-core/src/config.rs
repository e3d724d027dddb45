//! Editor configuration.

/// Placeholder hint used when the configuration does not provide one.
pub const DEFAULT_PLACEHOLDER: &str = "Start typing something here...";

/// Surface height applied when the configuration does not provide one.
pub const DEFAULT_HEIGHT: &str = "200px";

/// Construction options for an editor instance.
///
/// Captured once at creation; later changes to a config value have no
/// effect on an already-built editor. Only the toolbar is required, the
/// remaining fields fall back to host defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// Ordered tool identifiers to render into the toolbar.
    pub toolbar: Vec<String>,
    /// Initial surface height as a CSS dimension (e.g. `"300px"`).
    pub height: Option<String>,
    /// Initial surface width as a CSS dimension.
    pub width: Option<String>,
    /// Hint shown while the surface is empty; defaults to
    /// [`DEFAULT_PLACEHOLDER`].
    pub placeholder: Option<String>,
}

impl EditorConfig {
    /// Config with the given toolbar and everything else defaulted.
    pub fn new<I, T>(toolbar: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            toolbar: toolbar.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Placeholder to apply, falling back to the default hint.
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collects_toolbar_ids() {
        let config = EditorConfig::new(["bold", "italic"]);
        assert_eq!(config.toolbar, ["bold", "italic"]);
        assert_eq!(config.height, None);
        assert_eq!(config.placeholder, None);
    }

    #[test]
    fn test_placeholder_falls_back_to_default() {
        let mut config = EditorConfig::new(["bold"]);
        assert_eq!(config.placeholder_text(), DEFAULT_PLACEHOLDER);

        config.placeholder = Some("Write here".to_string());
        assert_eq!(config.placeholder_text(), "Write here");
    }
}
