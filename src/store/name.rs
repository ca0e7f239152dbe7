//! Note name validation
//!
//! A note name becomes a file name inside the storage directory, so it must
//! be a single plain path component. Anything that could escape the
//! directory (separators, `.`/`..`, NUL) is rejected before the name is
//! ever joined to a path.

use std::path::{Component, Path};

use super::StoreError;

/// Validate a client-supplied note name.
///
/// Accepts only non-empty names that parse as exactly one normal path
/// component. Leading-dot names are rejected as well: the listing treats
/// dotfiles as housekeeping files, so a dot-named note would be invisible.
/// Returns the name unchanged on success.
pub fn validate_name(name: &str) -> Result<&str, StoreError> {
    if name.is_empty() || name.starts_with('.') || name.contains('\0') {
        return Err(StoreError::InvalidName(name.to_string()));
    }

    // Reject both separator styles explicitly; on Unix a backslash is a
    // valid file-name byte, but these names travel in URLs and forms where
    // a Windows-style separator is never a legitimate note name.
    if name.contains('/') || name.contains('\\') {
        return Err(StoreError::InvalidName(name.to_string()));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(StoreError::InvalidName(name.to_string())),
    }
}
