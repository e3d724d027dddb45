//! Selection-state planning.
//!
//! The platform half of the synchronizer listens for selection changes and
//! re-applies control state; this module is the pure half. It derives which
//! commands a toolbar wants monitored and recomputes the desired active flag
//! for each from a state query, with no stored state: two plans over the
//! same selection are identical, so re-applying one is harmless.

use smol_str::SmolStr;

use crate::toolbar::ToolbarModel;

/// Desired presentation state for one monitored command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub command: SmolStr,
    /// Whether controls dispatching this command should carry the
    /// `active` class.
    pub active: bool,
}

/// Commands the synchronizer should track for `model`.
///
/// Queryable toggle controls contribute their command, in toolbar order,
/// deduplicated so each command is queried once per refresh. Derived once
/// when the editor is built; a toolbar without toggles yields an empty list
/// and the synchronizer has nothing to do.
pub fn monitored_commands(model: &ToolbarModel) -> Vec<SmolStr> {
    let mut commands: Vec<SmolStr> = Vec::new();
    for control in model.controls() {
        if !control.spec.is_queryable() {
            continue;
        }
        let command = control.spec.kind.command();
        if !commands.contains(command) {
            commands.push(command.clone());
        }
    }
    commands
}

/// Recompute the active flag for every monitored command.
///
/// `query` reports whether a command is currently in effect at the
/// selection; the result pairs each command with that answer.
pub fn sync_plan(monitored: &[SmolStr], query: impl Fn(&str) -> bool) -> Vec<ControlState> {
    monitored
        .iter()
        .map(|command| ControlState {
            command: command.clone(),
            active: query(command),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;

    fn model(ids: &[&str]) -> ToolbarModel {
        ToolbarModel::build(&ToolCatalog::builtin(), ids).unwrap()
    }

    #[test]
    fn test_monitored_commands_keeps_only_queryable_toggles() {
        let model = model(&["undo", "bold", "headingSelector", "italic", "outdent"]);
        assert_eq!(monitored_commands(&model), ["bold", "italic"]);
    }

    #[test]
    fn test_monitored_commands_dedups_repeated_controls() {
        let model = model(&["bold", "bold", "italic"]);
        assert_eq!(monitored_commands(&model), ["bold", "italic"]);
    }

    #[test]
    fn test_monitored_commands_empty_without_toggles() {
        let model = model(&["undo", "redo", "fontSelector"]);
        assert!(monitored_commands(&model).is_empty());
    }

    #[test]
    fn test_sync_plan_reflects_query_results() {
        let monitored: Vec<SmolStr> = vec!["bold".into(), "italic".into(), "indent".into()];
        let plan = sync_plan(&monitored, |command| command == "bold");

        assert_eq!(
            plan,
            vec![
                ControlState {
                    command: "bold".into(),
                    active: true
                },
                ControlState {
                    command: "italic".into(),
                    active: false
                },
                ControlState {
                    command: "indent".into(),
                    active: false
                },
            ]
        );
    }

    #[test]
    fn test_sync_plan_is_idempotent_for_fixed_selection() {
        let monitored: Vec<SmolStr> = vec!["bold".into(), "underline".into()];
        let query = |command: &str| command == "underline";
        assert_eq!(sync_plan(&monitored, query), sync_plan(&monitored, query));
    }
}
