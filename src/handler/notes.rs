//! Note endpoint handlers
//!
//! One function per HTTP operation; each resolves to a single store call
//! and maps the store's error taxonomy onto status codes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::store::StoreError;

/// Fixed greeting for the root path.
pub fn greeting() -> Response<Full<Bytes>> {
    http::ok_text("Welcome to the server!")
}

/// Fixed HTML upload form posting to the create endpoint.
pub fn upload_form() -> Response<Full<Bytes>> {
    http::html_response(include_str!("upload_form.html"))
}

/// GET /notes — every note with its text, as a JSON array.
pub async fn list_notes(state: &AppState) -> Response<Full<Bytes>> {
    match state.store.list().await {
        Ok(entries) => http::json_response(StatusCode::OK, &entries),
        Err(e) => store_error_response(&e),
    }
}

/// GET /notes/:name — the note's text, verbatim.
pub async fn get_note(state: &AppState, name: &str) -> Response<Full<Bytes>> {
    match state.store.read(name).await {
        Ok(text) => http::ok_text(&text),
        Err(e) => store_error_response(&e),
    }
}

/// PUT /notes/:name — replace the note's entire text with the raw body.
pub async fn update_note(state: &AppState, name: &str, body: &Bytes) -> Response<Full<Bytes>> {
    let text = String::from_utf8_lossy(body);
    match state.store.replace(name, &text).await {
        Ok(()) => {
            logger::log_note_event("updated", name);
            http::ok_text("Note updated")
        }
        Err(e) => store_error_response(&e),
    }
}

/// DELETE /notes/:name — remove the note.
pub async fn delete_note(state: &AppState, name: &str) -> Response<Full<Bytes>> {
    match state.store.remove(name).await {
        Ok(()) => {
            logger::log_note_event("deleted", name);
            http::ok_text("Note deleted")
        }
        Err(e) => store_error_response(&e),
    }
}

/// POST /write — create a note from `note_name`/`note` body fields.
pub async fn create_note(
    state: &AppState,
    content_type: Option<&str>,
    body: &Bytes,
) -> Response<Full<Bytes>> {
    let upload = http::parse_note_upload(content_type, body);
    let Some((name, text)) = upload.fields() else {
        return http::bad_request("Note name and text are required");
    };

    match state.store.create(name, text).await {
        Ok(()) => {
            logger::log_note_event("created", name);
            http::created("Note created")
        }
        Err(e) => store_error_response(&e),
    }
}

/// Map a store error onto its response. Unexpected I/O failures are logged
/// and surfaced as 500.
fn store_error_response(err: &StoreError) -> Response<Full<Bytes>> {
    match err {
        StoreError::NotFound => http::not_found(),
        StoreError::Conflict => http::conflict("Note already exists"),
        StoreError::InvalidName(_) => http::bad_request("Invalid note name"),
        StoreError::Io(e) => {
            logger::log_error(&format!("Storage failure: {e}"));
            http::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StoreConfig,
    };
    use crate::store::NoteStore;
    use http_body_util::BodyExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn test_state(dir: &Path) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            store: StoreConfig {
                dir: dir.display().to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                enable_cors: false,
                max_body_size: 1_048_576,
            },
        };
        let store = NoteStore::open(dir).unwrap();
        AppState::new(config, store)
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from(r#"{"note_name":"a","note":"hello"}"#);
        let resp = create_note(&state, Some("application/json"), &body).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = get_note(&state, "a").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "hello");
    }

    #[tokio::test]
    async fn test_create_conflict_is_409() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from("note_name=a&note=first");
        let ct = Some("application/x-www-form-urlencoded");
        assert_eq!(create_note(&state, ct, &body).await.status(), StatusCode::CREATED);

        let body = Bytes::from("note_name=a&note=second");
        let resp = create_note(&state, ct, &body).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        // First note's content is unchanged.
        assert_eq!(body_string(get_note(&state, "a").await).await, "first");
    }

    #[tokio::test]
    async fn test_create_missing_field_is_400() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from(r#"{"note_name":"a","note":""}"#);
        let resp = create_note(&state, Some("application/json"), &body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // No file was created.
        assert_eq!(get_note(&state, "a").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_plain_text_body_is_400() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from("note_name=a&note=b");
        let resp = create_note(&state, Some("text/plain"), &body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_traversal_name_is_400() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from(r#"{"note_name":"../evil","note":"x"}"#);
        let resp = create_note(&state, Some("application/json"), &body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_replaces_fully() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from(r#"{"note_name":"a","note":"hello world"}"#);
        create_note(&state, Some("application/json"), &body).await;

        let resp = update_note(&state, "a", &Bytes::from("world")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Note updated");

        assert_eq!(body_string(get_note(&state, "a").await).await, "world");
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let resp = update_note(&state, "ghost", &Bytes::from("text")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        let body = Bytes::from(r#"{"note_name":"a","note":"x"}"#);
        create_note(&state, Some("application/json"), &body).await;

        assert_eq!(delete_note(&state, "a").await.status(), StatusCode::OK);
        assert_eq!(get_note(&state, "a").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(delete_note(&state, "a").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_returns_all_notes() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());

        for (name, text) in [("a", "alpha"), ("b", "beta")] {
            let body = Bytes::from(format!(r#"{{"note_name":"{name}","note":"{text}"}}"#));
            create_note(&state, Some("application/json"), &body).await;
        }

        let resp = list_notes(&state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let mut listed: Vec<serde_json::Value> =
            serde_json::from_str(&body_string(resp).await).unwrap();
        listed.sort_by_key(|v| v["name"].as_str().unwrap_or_default().to_string());

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["name"], "a");
        assert_eq!(listed[0]["text"], "alpha");
        assert_eq!(listed[1]["name"], "b");
        assert_eq!(listed[1]["text"], "beta");
    }

    #[tokio::test]
    async fn test_fixed_pages() {
        let greeting_resp = greeting();
        assert_eq!(greeting_resp.status(), StatusCode::OK);

        let form_resp = upload_form();
        assert_eq!(form_resp.status(), StatusCode::OK);
        let html = body_string(form_resp).await;
        assert!(html.contains(r#"action="/write""#));
        assert!(html.contains("note_name"));
    }
}
