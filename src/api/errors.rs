use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: String,
    pub code: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.code, self.detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(_) => api_error(StatusCode::NOT_FOUND, "Task not found"),
            Error::Forbidden => api_error(StatusCode::FORBIDDEN, &err.to_string()),
            other => api_error(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
        }
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, detail: &str) -> ApiError {
    ApiError {
        detail: detail.to_string(),
        code: status.as_u16(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        assert_eq!(ApiError::from(Error::NotFound("x".into())).code, 404);
        assert_eq!(ApiError::from(Error::Forbidden).code, 403);
        assert_eq!(ApiError::from(Error::DuplicateId("t_1".into())).code, 500);
    }

    #[test]
    fn not_found_detail_does_not_echo_id() {
        let err = ApiError::from(Error::NotFound("secret-id".into()));
        assert_eq!(err.detail, "Task not found");
    }
}
