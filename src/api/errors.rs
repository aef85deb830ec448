use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing)]
    status: u16,
    error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: &str) -> Self {
        ErrorResponse {
            status: status.as_u16(),
            error: error.to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_only_the_error_message() {
        let response = ErrorResponse::new(StatusCode::NOT_FOUND, "Route not found.");
        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(body, r#"{"error":"Route not found."}"#);
    }
}
