//! Editing-surface abstraction.
//!
//! [`EditSurface`] defines the interface between the widget logic and the
//! host's editable region (browser `contenteditable`, a test double, etc.).
//! Everything above this trait is platform-free: command dispatch, toolbar
//! construction, plugin application, and selection-state planning all talk to
//! the surface through it.

/// Error type for surface operations.
#[derive(Debug, Clone)]
pub struct SurfaceError(pub String);

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SurfaceError {}

impl From<&str> for SurfaceError {
    fn from(s: &str) -> Self {
        SurfaceError(s.to_string())
    }
}

impl From<String> for SurfaceError {
    fn from(s: String) -> Self {
        SurfaceError(s)
    }
}

/// The host editing region a widget instance operates on.
///
/// The browser implementation wraps a `contenteditable` element and the
/// document-level editing API. Commands receive the surface mutably, so a
/// command action can both edit content and restyle the region.
pub trait EditSurface {
    /// Apply a named editing action to the current selection.
    ///
    /// `value` carries the argument for parameterized actions (block format
    /// tag, font family); plain toggles pass `None`.
    fn exec(&mut self, command: &str, value: Option<&str>) -> Result<(), SurfaceError>;

    /// Whether `command` is currently in effect at the selection.
    ///
    /// Used by the selection-state synchronizer to decide which toolbar
    /// controls show as active. Unknown commands report `false`.
    fn query_state(&self, command: &str) -> bool;

    /// Current contents of the editable region as markup.
    fn content(&self) -> String;

    /// Replace the contents of the editable region with `markup`.
    fn set_content(&mut self, markup: &str);

    /// Append `markup` at the end of the editable region.
    fn append_html(&mut self, markup: &str);

    /// Set the region's height to a CSS dimension string (e.g. `"300px"`).
    fn set_height(&mut self, dimension: &str);

    /// Set the region's width to a CSS dimension string.
    fn set_width(&mut self, dimension: &str);
}
