//! # Response Formatting
//!
//! Every successful response is a tab-indented JSON document followed by a
//! newline.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::errors::RestError;
use crate::encoding::{to_indented_vec, RESPONSE_INDENT};

/// Pretty-printed JSON response body
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_indented_vec(&self.0, RESPONSE_INDENT) {
            Ok(mut body) => {
                body.push(b'\n');
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response()
            }
            Err(e) => RestError::Internal(format!("encoding failed: {}", e)).into_response(),
        }
    }
}

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}

impl HealthResponse {
    pub fn ok(records: usize) -> Self {
        Self {
            status: "ok",
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_headers() {
        let response = PrettyJson(json!([{"id": 1}])).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_value(HealthResponse::ok(4)).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["records"], 4);
    }
}
