//! Tool catalog: identifier-keyed definitions of toolbar controls.
//!
//! The toolbar configuration is a list of tool identifiers; the catalog maps
//! each identifier to a [`ToolSpec`] describing how it renders (button or
//! selector, icon, tooltip) and what it dispatches. Special-cased control
//! shapes live here as data rather than as branches in the toolbar builder,
//! so plugins can contribute new controls of either shape.

use std::collections::HashMap;

use smol_str::SmolStr;

/// One entry of a selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Text shown in the dropdown.
    pub label: SmolStr,
    /// Value dispatched with the control's command when chosen.
    pub value: SmolStr,
}

impl SelectOption {
    pub fn new(label: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The control shape a tool renders as, and what it dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolKind {
    /// A push button dispatching `command` with no value.
    Button {
        command: SmolStr,
        /// Whether the selection-state synchronizer monitors this command
        /// and reflects it on the control.
        queryable: bool,
    },
    /// A dropdown dispatching `command` with the selected option's value.
    Select {
        command: SmolStr,
        options: Vec<SelectOption>,
    },
}

impl ToolKind {
    /// Command this control dispatches.
    pub fn command(&self) -> &SmolStr {
        match self {
            ToolKind::Button { command, .. } | ToolKind::Select { command, .. } => command,
        }
    }
}

/// Definition of one toolbar tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Bootstrap Icons class suffix (e.g. `"bi-type-bold"`); selectors have
    /// no icon.
    pub icon: Option<SmolStr>,
    /// Control title text.
    pub tooltip: SmolStr,
    pub kind: ToolKind,
}

impl ToolSpec {
    /// A plain action button (not monitored by the synchronizer).
    pub fn button(
        command: impl Into<SmolStr>,
        icon: impl Into<SmolStr>,
        tooltip: impl Into<SmolStr>,
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            tooltip: tooltip.into(),
            kind: ToolKind::Button {
                command: command.into(),
                queryable: false,
            },
        }
    }

    /// A button whose command state is monitored and shown as active.
    pub fn toggle(
        command: impl Into<SmolStr>,
        icon: impl Into<SmolStr>,
        tooltip: impl Into<SmolStr>,
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            tooltip: tooltip.into(),
            kind: ToolKind::Button {
                command: command.into(),
                queryable: true,
            },
        }
    }

    /// A dropdown selector.
    pub fn select(
        command: impl Into<SmolStr>,
        tooltip: impl Into<SmolStr>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            icon: None,
            tooltip: tooltip.into(),
            kind: ToolKind::Select {
                command: command.into(),
                options,
            },
        }
    }

    /// Whether the synchronizer should track this control's command.
    pub fn is_queryable(&self) -> bool {
        matches!(
            self.kind,
            ToolKind::Button {
                queryable: true,
                ..
            }
        )
    }
}

/// Identifier-keyed registry of tool definitions.
///
/// Plugins extend the catalog through their setup context; inserting an
/// existing identifier replaces the definition.
pub struct ToolCatalog {
    tools: HashMap<SmolStr, ToolSpec>,
}

impl ToolCatalog {
    /// A catalog with no tools.
    pub fn empty() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// The catalog of standard tools.
    ///
    /// Ten of the button tools are toggles tracked by the synchronizer;
    /// `outdent`, history, and the selectors are dispatch-only.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        catalog.insert("undo", ToolSpec::button("undo", "bi-arrow-counterclockwise", "undo"));
        catalog.insert("redo", ToolSpec::button("redo", "bi-arrow-clockwise", "redo"));
        catalog.insert("bold", ToolSpec::toggle("bold", "bi-type-bold", "Bold (Ctrl+B)"));
        catalog.insert("italic", ToolSpec::toggle("italic", "bi-type-italic", "Italic (Ctrl+I)"));
        catalog.insert(
            "underline",
            ToolSpec::toggle("underline", "bi-type-underline", "Underline (Ctrl+U)"),
        );
        catalog.insert(
            "strikethrough",
            ToolSpec::toggle("strikethrough", "bi-type-strikethrough", "Strikethrough"),
        );
        catalog.insert("highlight", ToolSpec::button("highlight", "bi-brush", "Highlight Text"));
        catalog.insert("insertLink", ToolSpec::button("insertLink", "bi-link", "Insert Link"));
        catalog.insert(
            "removeLink",
            ToolSpec::button("removeLink", "bi-link-45deg", "Remove Link"),
        );
        catalog.insert(
            "justifyLeft",
            ToolSpec::toggle("justifyLeft", "bi-text-left", "Justify Left"),
        );
        catalog.insert(
            "justifyCenter",
            ToolSpec::toggle("justifyCenter", "bi-text-center", "Justify Center"),
        );
        catalog.insert(
            "justifyRight",
            ToolSpec::toggle("justifyRight", "bi-text-right", "Justify Right"),
        );
        catalog.insert(
            "insertUnorderedList",
            ToolSpec::toggle("insertUnorderedList", "bi-list-task", "Unordered List"),
        );
        catalog.insert(
            "insertOrderedList",
            ToolSpec::toggle("insertOrderedList", "bi-list-ol", "Ordered List"),
        );
        catalog.insert("indent", ToolSpec::toggle("indent", "bi-text-indent-left", "Indent"));
        catalog.insert("outdent", ToolSpec::button("outdent", "bi-text-indent-right", "Outdent"));
        catalog.insert(
            "insertImage",
            ToolSpec::button("insertImage", "bi-image", "Insert Image"),
        );
        catalog.insert(
            "uploadImage",
            ToolSpec::button("uploadImage", "bi-upload", "Upload Image"),
        );
        catalog.insert(
            "headingSelector",
            ToolSpec::select(
                "formatBlock",
                "Heading",
                vec![
                    SelectOption::new("Normal", "p"),
                    SelectOption::new("Heading 1", "H1"),
                    SelectOption::new("Heading 2", "H2"),
                    SelectOption::new("Heading 3", "H3"),
                    SelectOption::new("Heading 4", "H4"),
                    SelectOption::new("Heading 5", "H5"),
                    SelectOption::new("Heading 6", "H6"),
                ],
            ),
        );
        catalog.insert(
            "fontSelector",
            ToolSpec::select(
                "fontName",
                "Font",
                vec![
                    SelectOption::new("Arial", "Arial"),
                    SelectOption::new("Times New Roman", "Times New Roman"),
                    SelectOption::new("Courier New", "Courier New"),
                ],
            ),
        );

        catalog
    }

    /// Insert or replace the definition for `id`.
    pub fn insert(&mut self, id: impl Into<SmolStr>, spec: ToolSpec) {
        let id = id.into();
        if self.tools.contains_key(&id) {
            tracing::trace!(tool = %id, "replacing catalog tool");
        }
        self.tools.insert(id, spec);
    }

    /// Definition for `id`, if one exists.
    pub fn get(&self, id: &str) -> Option<&ToolSpec> {
        self.tools.get(id)
    }

    /// Whether `id` has a definition.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// All known identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &SmolStr> {
        self.tools.keys()
    }

    /// Number of defined tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_standard_tools() {
        let catalog = ToolCatalog::builtin();
        for id in [
            "undo",
            "redo",
            "bold",
            "italic",
            "underline",
            "strikethrough",
            "highlight",
            "insertLink",
            "removeLink",
            "justifyLeft",
            "justifyCenter",
            "justifyRight",
            "insertUnorderedList",
            "insertOrderedList",
            "indent",
            "outdent",
            "insertImage",
            "uploadImage",
            "headingSelector",
            "fontSelector",
        ] {
            assert!(catalog.contains(id), "missing builtin tool {id}");
        }
    }

    #[test]
    fn test_toggles_are_queryable_and_buttons_are_not() {
        let catalog = ToolCatalog::builtin();
        assert!(catalog.get("bold").unwrap().is_queryable());
        assert!(catalog.get("indent").unwrap().is_queryable());
        // History and outdent dispatch but never show as active.
        assert!(!catalog.get("undo").unwrap().is_queryable());
        assert!(!catalog.get("outdent").unwrap().is_queryable());
        assert!(!catalog.get("headingSelector").unwrap().is_queryable());
    }

    #[test]
    fn test_heading_selector_dispatches_format_block() {
        let catalog = ToolCatalog::builtin();
        let spec = catalog.get("headingSelector").unwrap();
        assert_eq!(spec.kind.command(), "formatBlock");
        let ToolKind::Select { options, .. } = &spec.kind else {
            panic!("headingSelector must be a selector");
        };
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], SelectOption::new("Normal", "p"));
        assert_eq!(options[6], SelectOption::new("Heading 6", "H6"));
    }

    #[test]
    fn test_font_selector_dispatches_font_name() {
        let catalog = ToolCatalog::builtin();
        let spec = catalog.get("fontSelector").unwrap();
        assert_eq!(spec.kind.command(), "fontName");
        let ToolKind::Select { options, .. } = &spec.kind else {
            panic!("fontSelector must be a selector");
        };
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Arial", "Times New Roman", "Courier New"]);
    }

    #[test]
    fn test_insert_replaces_existing_definition() {
        let mut catalog = ToolCatalog::builtin();
        let before = catalog.len();
        catalog.insert("bold", ToolSpec::button("myBold", "bi-type-bold", "Bold"));
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.get("bold").unwrap().kind.command(), "myBold");
        assert!(!catalog.get("bold").unwrap().is_queryable());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ToolCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get("bold").is_none());
    }
}
