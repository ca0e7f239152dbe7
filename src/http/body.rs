//! Request body parsing module
//!
//! The create endpoint accepts its `note_name`/`note` fields as JSON or as
//! a URL-encoded form. Any other content type carries no named fields, so
//! parsing yields an empty upload and the handler rejects it for missing
//! fields — the same outcome the field-presence check produces.

use serde::Deserialize;

/// Fields carried by a create-note request body.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct NoteUpload {
    #[serde(default)]
    pub note_name: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl NoteUpload {
    /// Both fields, if each is present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let name = self.note_name.as_deref().filter(|s| !s.is_empty())?;
        let text = self.note.as_deref().filter(|s| !s.is_empty())?;
        Some((name, text))
    }
}

/// Parse a create-note request body according to its content type.
///
/// Malformed JSON is treated the same as absent fields; the caller cannot
/// distinguish a body it could not parse from one that named neither field.
pub fn parse_note_upload(content_type: Option<&str>, body: &[u8]) -> NoteUpload {
    // Media type comparison ignores parameters and case
    // ("Application/JSON; charset=utf-8" matches "application/json").
    let media_type = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if media_type.eq_ignore_ascii_case("application/json") {
        serde_json::from_slice(body).unwrap_or_default()
    } else if media_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        parse_form(body)
    } else {
        NoteUpload::default()
    }
}

fn parse_form(body: &[u8]) -> NoteUpload {
    let mut upload = NoteUpload::default();
    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "note_name" => upload.note_name = Some(value.into_owned()),
            "note" => upload.note = Some(value.into_owned()),
            _ => {}
        }
    }
    upload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_body() {
        let upload = parse_note_upload(
            Some("application/json"),
            br#"{"note_name":"a","note":"hello"}"#,
        );
        assert_eq!(upload.fields(), Some(("a", "hello")));
    }

    #[test]
    fn test_parse_json_with_charset() {
        let upload = parse_note_upload(
            Some("application/json; charset=utf-8"),
            br#"{"note_name":"a","note":"hello"}"#,
        );
        assert_eq!(upload.fields(), Some(("a", "hello")));
    }

    #[test]
    fn test_parse_form_body() {
        let upload = parse_note_upload(
            Some("application/x-www-form-urlencoded"),
            b"note_name=my+note&note=hello%20world",
        );
        assert_eq!(upload.note_name.as_deref(), Some("my note"));
        assert_eq!(upload.note.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_plain_text_has_no_fields() {
        let upload = parse_note_upload(Some("text/plain"), b"just some text");
        assert_eq!(upload, NoteUpload::default());
        assert!(upload.fields().is_none());
    }

    #[test]
    fn test_missing_content_type_has_no_fields() {
        let upload = parse_note_upload(None, b"note_name=a&note=b");
        assert!(upload.fields().is_none());
    }

    #[test]
    fn test_malformed_json_has_no_fields() {
        let upload = parse_note_upload(Some("application/json"), b"{not json");
        assert!(upload.fields().is_none());
    }

    #[test]
    fn test_empty_field_rejected() {
        let upload = parse_note_upload(
            Some("application/json"),
            br#"{"note_name":"a","note":""}"#,
        );
        assert!(upload.fields().is_none());

        let upload = parse_note_upload(Some("application/json"), br#"{"note_name":"a"}"#);
        assert!(upload.fields().is_none());
    }
}
