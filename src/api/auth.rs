use crate::api::errors::ApiError;
use crate::constants::API_KEY_HEADER;
use crate::core::{PresentedCredentials, TaskService};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

fn header_value(headers: &HeaderMap, name: impl header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Pulls the credential headers out of a request
pub fn presented_credentials(headers: &HeaderMap) -> PresentedCredentials {
    PresentedCredentials {
        api_key: header_value(headers, API_KEY_HEADER),
        authorization: header_value(headers, header::AUTHORIZATION),
    }
}

/// Middleware rejecting requests with 403 before they reach a task handler.
///
/// On success the granted [`Authorized`](crate::core::Authorized) token is
/// stored in the request extensions for the handler to pass on.
pub async fn require_auth(
    State(service): State<TaskService>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = service.authorize(&presented_credentials(request.headers()))?;
    request.extensions_mut().insert(authorized);
    Ok(next.run(request).await)
}
