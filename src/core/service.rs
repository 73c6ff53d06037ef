use super::auth::{Authenticator, Authorized, PresentedCredentials};
use super::engine::ExecutionEngine;
use super::executor::TaskExecutor;
use super::store::TaskStore;
use super::surface::ApiSurface;
use super::task::{TaskRecord, TaskSpec, TaskStatusView};
use super::id;
use crate::errors::Error;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Externally callable surface of the task engine.
///
/// One instance (cheaply cloned) backs every API surface, so all aliases
/// share the same store and engine. Task operations require the
/// [`Authorized`] token returned by [`TaskService::authorize`].
#[derive(Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
    engine: ExecutionEngine,
    authenticator: Arc<Authenticator>,
}

impl TaskService {
    pub fn new(authenticator: Authenticator, executor: Arc<dyn TaskExecutor>) -> Self {
        let store = Arc::new(TaskStore::new());
        let engine = ExecutionEngine::new(Arc::clone(&store), executor);
        Self {
            store,
            engine,
            authenticator: Arc::new(authenticator),
        }
    }

    /// Checks caller credentials and hands out the token task operations need
    pub fn authorize(&self, presented: &PresentedCredentials) -> Result<Authorized, Error> {
        self.authenticator.authenticate(presented).inspect_err(|_| {
            warn!("Rejected request with invalid credentials");
        })
    }

    /// Stores a new `pending` task, schedules it and returns its id.
    ///
    /// The record is queryable before this returns; the work itself runs in
    /// the background.
    pub fn submit_task(
        &self,
        _auth: &Authorized,
        spec: TaskSpec,
        surface: ApiSurface,
    ) -> Result<String, Error> {
        let task_id = id::generate(surface);
        let record = TaskRecord::new(task_id.clone(), spec, surface);

        self.store.insert(record).inspect_err(|e| {
            error!("Refusing submission through {} surface: {}", surface, e);
        })?;
        self.engine.dispatch(task_id.clone());

        info!(
            "Accepted task {} through {} surface ({} tracked)",
            task_id,
            surface,
            self.store.len()
        );
        Ok(task_id)
    }

    /// Returns the current status of a task
    pub fn get_task(&self, _auth: &Authorized, task_id: &str) -> Result<TaskStatusView, Error> {
        self.store.get(task_id).map(|record| record.status_view())
    }

    #[cfg(test)]
    pub fn task_count(&self) -> usize {
        self.store.len()
    }
}
