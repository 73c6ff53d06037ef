//! Background execution of stored tasks.
//!
//! Each dispatched task gets its own tokio task that drives the record
//! through `pending -> processing -> completed | failed`. Every mutation goes
//! through [`TaskStore::update`]. There is no cancellation and no deadline: once
//! dispatched, a task runs until its executor returns.

use super::executor::TaskExecutor;
use super::store::TaskStore;
use super::task::TaskResult;
use crate::errors::Error;
use std::any::Any;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ExecutionEngine {
    store: Arc<TaskStore>,
    executor: Arc<dyn TaskExecutor>,
}

impl ExecutionEngine {
    pub fn new(store: Arc<TaskStore>, executor: Arc<dyn TaskExecutor>) -> Self {
        Self { store, executor }
    }

    /// Schedules execution of a stored `pending` task and returns immediately.
    ///
    /// Dropping the returned handle detaches the work; it does not abort it.
    /// Dispatching the same id twice is a logic error: the second run finds
    /// the record already past `pending` and gives up without touching it.
    pub fn dispatch(&self, task_id: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let executor = Arc::clone(&self.executor);
        tokio::spawn(run_task(store, executor, task_id))
    }
}

async fn run_task(store: Arc<TaskStore>, executor: Arc<dyn TaskExecutor>, task_id: String) {
    let record = match store.update(&task_id, |r| r.start_processing()) {
        Ok(record) => record,
        Err(e) => {
            error!("Task {} could not start: {}", task_id, e);
            return;
        }
    };
    info!(
        "Task {} ({} surface) is processing",
        task_id, record.surface
    );

    // The work runs in its own tokio task so a panic surfaces as a JoinError
    // here instead of unwinding through the engine.
    let work = tokio::spawn(async move { executor.execute(&record).await });
    let settled = match outcome(work.await) {
        Ok(result) => store.update(&task_id, |r| r.complete(result)),
        Err(reason) => {
            warn!("Task {} failed: {}", task_id, reason);
            store.update(&task_id, |r| r.fail(reason))
        }
    };

    match settled {
        Ok(record) => info!(
            "Task {} settled as {} at {}",
            task_id,
            record.state,
            record.updated_at.to_rfc3339()
        ),
        Err(e) => error!("Task {} could not be settled: {}", task_id, e),
    }
}

fn outcome(joined: Result<Result<TaskResult, Error>, JoinError>) -> Result<TaskResult, String> {
    match joined {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) if e.is_panic() => Err(format!(
            "Execution panicked: {}",
            panic_message(e.into_panic())
        )),
        Err(e) => Err(format!("Execution aborted: {}", e)),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
