use super::task::{TaskRecord, TaskResult};
use crate::constants::SIMULATED_STEPS_TAKEN;
use crate::errors::Error;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::debug;

/// Performs the actual work of a task.
///
/// The engine owns the state machine; an executor only turns a record into a
/// result or an error. Returning `Err` or panicking both settle the task as
/// `failed`.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, task: &TaskRecord) -> Result<TaskResult, Error>;
}

/// Placeholder executor: waits for a fixed duration and reports a fabricated result
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    work_duration: Duration,
}

impl SimulatedExecutor {
    pub fn new(work_duration: Duration) -> Self {
        Self { work_duration }
    }
}

#[async_trait]
impl TaskExecutor for SimulatedExecutor {
    async fn execute(&self, task: &TaskRecord) -> Result<TaskResult, Error> {
        debug!(
            "Simulating task {} for {:?}: {}",
            task.id, self.work_duration, task.spec.navigation_goal
        );
        tokio::time::sleep(self.work_duration).await;

        let elapsed = Utc::now() - task.created_at;
        Ok(TaskResult {
            steps_taken: SIMULATED_STEPS_TAKEN,
            completion_time: elapsed.num_milliseconds() as f64 / 1000.0,
            screenshots: Vec::new(),
        })
    }
}
