use crate::api::errors::ApiError;
use crate::core::{ApiSurface, Authorized, TaskService, TaskSpec, TaskStatusView};
use axum::{
    extract::{Extension, Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

/// Body returned by the health endpoints
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
    pub timestamp: String,
}

/// Represents the response payload after successfully creating a task
#[derive(Serialize)]
pub struct CreateTaskResponse {
    pub task_id: String,
}

/// Liveness probe, no authentication
pub async fn health(Extension(surface): Extension<ApiSurface>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: surface.version_label(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Creates a new task and schedules it in the background
///
/// # Returns
/// * `Result<Json<CreateTaskResponse>, ApiError>` - The new task id or error
#[axum::debug_handler(state = TaskService)]
pub async fn create_task(
    State(service): State<TaskService>,
    Extension(auth): Extension<Authorized>,
    Extension(surface): Extension<ApiSurface>,
    Json(spec): Json<TaskSpec>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let task_id = service.submit_task(&auth, spec, surface)?;
    Ok(Json(CreateTaskResponse { task_id }))
}

/// Retrieves the status of a task by its ID
#[axum::debug_handler(state = TaskService)]
pub async fn get_task(
    State(service): State<TaskService>,
    Extension(auth): Extension<Authorized>,
    Path(id): Path<String>,
) -> Result<Json<TaskStatusView>, ApiError> {
    Ok(Json(service.get_task(&auth, &id)?))
}
