//! Core module containing the task lifecycle engine
//!
//! This module contains:
//! - Task records, specs and the state machine
//! - Identifier generation per API surface
//! - The concurrent task store
//! - The background execution engine and pluggable executors
//! - Authentication and the service facade tying it all together

mod auth;
mod engine;
mod executor;
mod id;
mod service;
mod store;
mod surface;
mod task;
mod task_state;

pub use auth::*;
pub use executor::*;
pub use service::*;
pub use surface::*;
pub use task::*;
pub use task_state::*;
