//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients.
//!
//! It:
//! - **Dispatches** to the command function for the operation
//! - **Picks the record shape** for a [`Screen`] (achievements or review projects)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O beyond what the store does, and no formatting.
//!
//! `AchqApi<S: DataStore>` is generic over storage: `FileStore` in the CLI,
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Achievement, ReviewProject, Screen};
use crate::query::ListView;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// Calls a generic command with the record type that belongs to `$screen`.
macro_rules! for_screen {
    ($screen:expr, $($cmd:ident)::+, $($arg:expr),* $(,)?) => {
        match $screen {
            Screen::Achievements => $($cmd)::+::<S, Achievement>($($arg),*),
            Screen::MeetingReview | Screen::TrackReview => {
                $($cmd)::+::<S, ReviewProject>($($arg),*)
            }
        }
    };
}

/// The main API facade for achq operations.
pub struct AchqApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> AchqApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn init(&mut self, force: bool) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, force)
    }

    pub fn list(&self, screen: Screen, view: ListView) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::list::run, &self.store, screen, view)
    }

    pub fn toggle_select(&mut self, screen: Screen, ids: &[&str]) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::select::toggle, &mut self.store, screen, ids)
    }

    pub fn unselect(&mut self, screen: Screen, ids: &[&str]) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::select::unselect, &mut self.store, screen, ids)
    }

    pub fn select_matching(
        &mut self,
        screen: Screen,
        view: ListView,
    ) -> Result<commands::CmdResult> {
        for_screen!(
            screen,
            commands::select::all_matching,
            &mut self.store,
            screen,
            view
        )
    }

    pub fn clear_selection(&mut self, screen: Screen) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::select::clear, &mut self.store, screen)
    }

    pub fn selection(&self, screen: Screen) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::select::show, &self.store, screen)
    }

    /// Runs a batch action over the selection. `export` also writes an archive into
    /// `out_dir`.
    pub fn batch(
        &mut self,
        screen: Screen,
        action_id: &str,
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        if action_id == "export" {
            return for_screen!(screen, commands::export::run, &mut self.store, screen, out_dir);
        }
        for_screen!(screen, commands::batch::run, &mut self.store, screen, action_id)
    }

    pub fn request_delete(&mut self, screen: Screen, id: &str) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::delete::request, &mut self.store, screen, id)
    }

    pub fn confirm_delete(&mut self, screen: Screen) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::delete::confirm, &mut self.store, screen)
    }

    pub fn cancel_delete(&mut self, screen: Screen) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::delete::cancel, &mut self.store, screen)
    }

    pub fn delete_now(&mut self, screen: Screen, ids: &[&str]) -> Result<commands::CmdResult> {
        for_screen!(screen, commands::delete::now, &mut self.store, screen, ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel, PageInfo};
