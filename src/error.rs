use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use serde::Serialize;

/// JSON error body for extractor failures
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query string errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}
