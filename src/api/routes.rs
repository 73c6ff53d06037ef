//! API routes configuration module

use crate::api::auth::require_auth;
use crate::api::handlers::{create_task, get_task, health};
use crate::core::{ApiSurface, TaskService};
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::CorsLayer;

/// Routes of a single surface; the surface tag is the only thing that differs
fn surface_routes(service: &TaskService, surface: ApiSurface) -> Router<TaskService> {
    let tasks = Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/:id", get(get_task))
        .route_layer(middleware::from_fn_with_state(service.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .merge(tasks)
        .layer(Extension(surface))
}

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `service` - Task service shared by every surface
///
/// # Returns
/// * `Router` - Bare, `/api/v1` and `/api/v2` routes backed by one service
pub fn app(service: TaskService) -> Router {
    let mut router = Router::new();
    for surface in [ApiSurface::Unversioned, ApiSurface::V1, ApiSurface::V2] {
        let routes = surface_routes(&service, surface);
        router = match surface.path_prefix() {
            "" => router.merge(routes),
            prefix => router.nest(prefix, routes),
        };
    }

    router.layer(CorsLayer::permissive()).with_state(service)
}
