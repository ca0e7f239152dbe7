//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body-size
//! checks, route matching, and access logging.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};

use crate::config::AppState;
use crate::handler::notes;
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    remote_addr: std::net::SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = version_str(req.version()).to_string();
    entry.referer = header_string(&req, "referer");
    entry.user_agent = header_string(&req, "user-agent");

    let response = dispatch(req, &state).await;

    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    if state.config.logging.access_log {
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Validate the request envelope and route it to a handler.
async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let method = req.method().clone();

    if !matches!(
        method,
        Method::GET | Method::POST | Method::PUT | Method::DELETE | Method::OPTIONS
    ) {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::method_not_allowed();
    }

    if method == Method::OPTIONS {
        return http::options_response(state.config.http.enable_cors);
    }

    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    let path = req.uri().path().to_string();
    match (method, path.as_str()) {
        (Method::GET, "/") => notes::greeting(),
        (Method::GET, "/UploadForm.html") => notes::upload_form(),
        (Method::GET, "/notes") => notes::list_notes(state).await,
        (Method::POST, "/write") => {
            let content_type = header_string(&req, "content-type");
            match collect_body(req).await {
                Ok(body) => notes::create_note(state, content_type.as_deref(), &body).await,
                Err(resp) => resp,
            }
        }
        (method, p) => match p.strip_prefix("/notes/") {
            Some(name) => {
                let name = name.to_string();
                match method {
                    Method::GET => notes::get_note(state, &name).await,
                    Method::DELETE => notes::delete_note(state, &name).await,
                    Method::PUT => match collect_body(req).await {
                        Ok(body) => notes::update_note(state, &name, &body).await,
                        Err(resp) => resp,
                    },
                    _ => http::not_found(),
                }
            }
            None => http::not_found(),
        },
    }
}

/// Read the full request body into memory.
async fn collect_body(
    req: Request<hyper::body::Incoming>,
) -> Result<Bytes, Response<Full<Bytes>>> {
    match req.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(http::bad_request("Failed to read request body"))
        }
    }
}

/// Validate the Content-Length header and return 413 if exceeded.
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::payload_too_large())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
