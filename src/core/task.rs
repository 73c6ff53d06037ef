use super::surface::ApiSurface;
use super::task_state::TaskState;
use crate::constants::DEFAULT_MAX_STEPS;
use crate::errors::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_max_steps() -> i64 {
    DEFAULT_MAX_STEPS
}

/// Submission payload describing one automation task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Target resource the automation starts from
    #[serde(default)]
    pub url: Option<String>,
    /// Free-text description of what to achieve
    pub navigation_goal: String,
    /// Opaque structured input handed to the automation
    #[serde(default)]
    pub navigation_payload: Option<Map<String, Value>>,
    /// Step budget
    #[serde(default = "default_max_steps")]
    pub max_steps: i64,
    /// Where the automation should run from
    #[serde(default)]
    pub proxy_location: Option<String>,
}

/// Output of a successfully completed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    pub steps_taken: u32,
    /// Seconds between record creation and completion
    pub completion_time: f64,
    pub screenshots: Vec<String>,
}

/// The stored record of a submitted task
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: String,
    pub spec: TaskSpec,
    pub state: TaskState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub error: Option<String>,
    pub result: Option<TaskResult>,
    /// Namespace the record was created through
    pub surface: ApiSurface,
}

impl TaskRecord {
    /// Creates a fully constructed `Pending` record
    pub fn new(id: String, spec: TaskSpec, surface: ApiSurface) -> Self {
        let now = Utc::now();
        Self {
            id,
            spec,
            state: TaskState::Pending,
            created_at: now,
            updated_at: now,
            error: None,
            result: None,
            surface,
        }
    }

    /// Moves the record to `Processing`
    pub fn start_processing(&mut self) -> Result<(), Error> {
        self.transition(TaskState::Processing)
    }

    /// Moves the record to `Completed` and attaches the result
    pub fn complete(&mut self, result: TaskResult) -> Result<(), Error> {
        self.transition(TaskState::Completed)?;
        self.result = Some(result);
        Ok(())
    }

    /// Moves the record to `Failed` and attaches the error message
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), Error> {
        self.transition(TaskState::Failed)?;
        self.error = Some(message.into());
        Ok(())
    }

    fn transition(&mut self, next: TaskState) -> Result<(), Error> {
        if !self.state.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                id: self.id.clone(),
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Caller-facing projection of the record
    pub fn status_view(&self) -> TaskStatusView {
        TaskStatusView {
            status: self.state,
            error: self.error.clone(),
            result: self.result.clone(),
        }
    }
}

/// What a status query returns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatusView {
    pub status: TaskState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,
}
