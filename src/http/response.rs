//! HTTP response building module
//!
//! One builder per response shape the service emits. Builder failures
//! never panic; they degrade to a bare fallback response and log the
//! error.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Build a plain-text response with the given status.
fn plain_text(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from(body.to_string())))
        })
}

/// 200 OK with a plain-text body.
pub fn ok_text(body: &str) -> Response<Full<Bytes>> {
    plain_text(StatusCode::OK, body)
}

/// 201 Created with a plain-text confirmation.
pub fn created(body: &str) -> Response<Full<Bytes>> {
    plain_text(StatusCode::CREATED, body)
}

/// 400 Bad Request.
pub fn bad_request(message: &str) -> Response<Full<Bytes>> {
    plain_text(StatusCode::BAD_REQUEST, message)
}

/// 404 Not Found.
pub fn not_found() -> Response<Full<Bytes>> {
    plain_text(StatusCode::NOT_FOUND, "Not found")
}

/// 409 Conflict.
pub fn conflict(message: &str) -> Response<Full<Bytes>> {
    plain_text(StatusCode::CONFLICT, message)
}

/// 500 Internal Server Error.
pub fn internal_error() -> Response<Full<Bytes>> {
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// 405 Method Not Allowed.
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", "GET, POST, PUT, DELETE, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error(405, &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// 413 Payload Too Large.
pub fn payload_too_large() -> Response<Full<Bytes>> {
    plain_text(StatusCode::PAYLOAD_TOO_LARGE, "413 Payload Too Large")
}

/// 204 response for OPTIONS (preflight) requests.
pub fn options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, POST, PUT, DELETE, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header(
                "Access-Control-Allow-Methods",
                "GET, POST, PUT, DELETE, OPTIONS",
            )
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error(204, &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// JSON response serialized from any serializable value.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return internal_error();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from("{}")))
        })
}

/// 200 response with a fixed HTML document.
pub fn html_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content.len())
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::from(content)))
        })
}

fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
