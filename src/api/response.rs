// API response utility functions module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::convert::Infallible;

use super::types::ErrorResponse;
use crate::logger;

/// Build a JSON response from any serializable body.
#[allow(clippy::unnecessary_wraps)]
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"error":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error")))));
        }
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        }))
}

/// Build an `{"error": ...}` response with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = ErrorResponse {
        error: message.to_string(),
    };
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

/// 404 Not Found response for unknown API paths.
pub fn not_found() -> Response<Full<Bytes>> {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_body_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "No note provided");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["Content-Type"],
            "application/json"
        );
    }

    #[test]
    fn test_error_message_is_json_escaped() {
        let body = ErrorResponse {
            error: "quote \" and newline \n".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#"\""#));
        assert!(json.contains(r"\n"));
    }
}
