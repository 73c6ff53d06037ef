use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Represents the current state of a task in the system
///
/// The only valid edges are `Pending -> Processing -> Completed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// Record stored, background work not started yet
    Pending,
    /// Background work is running
    Processing,
    /// Work finished and a result is attached
    Completed,
    /// Work failed and an error message is attached
    Failed,
}

impl TaskState {
    /// Returns true for `Completed` and `Failed`
    #[cfg(test)]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Failed)
    }

    /// Checks whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: TaskState) -> bool {
        matches!(
            (self, next),
            (TaskState::Pending, TaskState::Processing)
                | (TaskState::Processing, TaskState::Completed)
                | (TaskState::Processing, TaskState::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Pending => "pending",
            TaskState::Processing => "processing",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskState {
    type Err = ();

    /// Attempts to create a TaskState from its lowercase wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskState::Pending),
            "processing" => Ok(TaskState::Processing),
            "completed" => Ok(TaskState::Completed),
            "failed" => Ok(TaskState::Failed),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TaskState; 4] = [
        TaskState::Pending,
        TaskState::Processing,
        TaskState::Completed,
        TaskState::Failed,
    ];

    #[test]
    fn only_forward_edges_are_allowed() {
        let allowed: Vec<(TaskState, TaskState)> = ALL
            .iter()
            .flat_map(|from| ALL.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from.can_transition_to(*to))
            .collect();

        assert_eq!(
            allowed,
            vec![
                (TaskState::Pending, TaskState::Processing),
                (TaskState::Processing, TaskState::Completed),
                (TaskState::Processing, TaskState::Failed),
            ]
        );
    }

    #[test]
    fn terminal_states_have_no_exit() {
        for state in ALL.iter().filter(|s| s.is_terminal()) {
            assert!(ALL.iter().all(|next| !state.can_transition_to(*next)));
        }
        assert!(!TaskState::Pending.is_terminal());
        assert!(!TaskState::Processing.is_terminal());
    }

    #[test]
    fn wire_names_parse_back() {
        for state in ALL {
            assert_eq!(state.to_string().parse::<TaskState>(), Ok(state));
        }
        assert!("In Progress".parse::<TaskState>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TaskState::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
