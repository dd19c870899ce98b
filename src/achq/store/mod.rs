//! # Storage Layer
//!
//! The query engine never does I/O. Records and the per-screen session state
//! (selection, pending delete) come from a [`DataStore`], which the API facade
//! loads before and saves after each operation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files under a data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── achievements.json           # record collection (JSON array)
//! ├── achievements.session.json   # selection + pending delete
//! ├── meeting-review.json
//! ├── track-review.json
//! └── config.json
//! ```

use crate::batch::DeleteConfirmation;
use crate::error::Result;
use crate::model::Screen;
use crate::selection::Selection;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// What survives between two invocations besides the records themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub confirmation: DeleteConfirmation,
}

/// Abstract interface for record storage.
///
/// Each screen has its own collection. A screen that was never saved loads as an
/// empty collection with a default session.
pub trait DataStore {
    /// Load the full collection of a screen, in stored order
    fn load_records<R: DeserializeOwned>(&self, screen: Screen) -> Result<Vec<R>>;

    /// Replace the full collection of a screen
    fn save_records<R: Serialize>(&mut self, screen: Screen, records: &[R]) -> Result<()>;

    fn load_session(&self, screen: Screen) -> Result<SessionState>;

    fn save_session(&mut self, screen: Screen, state: &SessionState) -> Result<()>;

    /// Whether a collection was ever saved for the screen
    fn has_records(&self, screen: Screen) -> Result<bool>;
}
