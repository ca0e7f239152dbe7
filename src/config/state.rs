// Application state module
// The per-process state shared across connections

use crate::config::Config;
use crate::store::NoteStore;

/// Application state: the loaded configuration and the note store it
/// points at. Constructed once at startup and shared via `Arc`; the store
/// is injected so tests can build state around a temporary directory.
pub struct AppState {
    pub config: Config,
    pub store: NoteStore,
}

impl AppState {
    pub fn new(config: Config, store: NoteStore) -> Self {
        Self { config, store }
    }
}
