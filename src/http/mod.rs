//! HTTP protocol layer module
//!
//! Response builders and request body parsing, decoupled from the note
//! store business logic.

pub mod body;
pub mod response;

pub use body::{parse_note_upload, NoteUpload};
pub use response::{
    bad_request, conflict, created, html_response, internal_error, json_response,
    method_not_allowed, not_found, ok_text, options_response, payload_too_large,
};
