// Route exports
pub mod matches;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure),
    );
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
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

/// Handle JSON payload errors, including missing request fields
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Worst case JSON bytes for one character: a surrogate pair of `\uXXXX` escapes
const MAX_JSON_BYTES_PER_CHAR: usize = 12;

/// Room for keys, quotes and whitespace around the two text fields
const JSON_ENVELOPE_BYTES: usize = 64 * 1024;

/// Body size that fits two fully escaped fields of `max_text_chars` each
pub fn json_body_limit(max_text_chars: usize) -> usize {
    2 * max_text_chars * MAX_JSON_BYTES_PER_CHAR + JSON_ENVELOPE_BYTES
}

/// JSON extractor config with the error handler attached
///
/// The byte limit is derived from the character limit so that escaping never
/// rejects a body the length check would accept.
pub fn json_config(max_text_chars: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(json_body_limit(max_text_chars))
        .error_handler(handle_json_payload_error)
}
