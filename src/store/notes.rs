//! Filesystem note store
//!
//! One flat file per note inside the storage directory: file name = note
//! name, file contents = note text verbatim. Every operation is a single
//! filesystem primitive, so there is no existence-check window to race
//! against — create uses exclusive-create, replace opens without create,
//! remove maps the unlink error directly.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{validate_name, StoreError};

/// A listed note: its name and full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub name: String,
    pub text: String,
}

/// Filesystem-backed note store rooted at a single flat directory.
///
/// The directory path is injected at construction so tests can point each
/// instance at its own temporary directory.
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    /// Open the store, creating the storage directory (and any missing
    /// parents) if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The storage directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate the name and resolve it to a path inside the storage
    /// directory. Every operation goes through here.
    fn note_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let name = validate_name(name)?;
        Ok(self.dir.join(name))
    }

    /// Create a new note. Fails with `Conflict` if the name is taken.
    pub async fn create(&self, name: &str, text: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::Conflict);
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        file.write_all(text.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Read a note's text. Fails with `NotFound` if no such note exists.
    pub async fn read(&self, name: &str) -> Result<String, StoreError> {
        let path = self.note_path(name)?;
        match fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Replace an existing note's entire text. Fails with `NotFound` if no
    /// such note exists; empty text is allowed.
    pub async fn replace(&self, name: &str, text: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        // Opening without `create` makes the existence check part of the
        // open itself.
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
            Err(e) => return Err(StoreError::Io(e)),
        };
        file.write_all(text.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Remove a note. Fails with `NotFound` if no such note exists.
    pub async fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.note_path(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// List every note with its full text, in directory-enumeration order
    /// (unspecified, not sorted). Subdirectories and dotfiles are skipped;
    /// entries that vanish between enumeration and read (a concurrent
    /// delete) are skipped as well.
    pub async fn list(&self) -> Result<Vec<NoteEntry>, StoreError> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.dir).await?;

        while let Some(entry) = dir.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if !entry.file_type().await.map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            match fs::read_to_string(entry.path()).await {
                Ok(text) => entries.push(NoteEntry {
                    name: name.to_string(),
                    text,
                }),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::Io(e)),
            }
        }

        Ok(entries)
    }
}
