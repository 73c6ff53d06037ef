use crate::core::TaskState;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Invalid API key or Bearer token")]
    Forbidden,
    #[error("Task id already in use: {0}")]
    DuplicateId(String),
    #[error("Invalid transition for task {id}: {from} -> {to}")]
    InvalidTransition {
        id: String,
        from: TaskState,
        to: TaskState,
    },
    #[error("Execution failed: {0}")]
    Execution(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
