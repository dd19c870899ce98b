use super::{DataStore, SessionState};
use crate::error::{AchqError, Result};
use crate::model::Screen;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn records_path(&self, screen: Screen) -> PathBuf {
        self.root.join(format!("{}.json", screen.slug()))
    }

    fn session_path(&self, screen: Screen) -> PathBuf {
        self.root.join(format!("{}.session.json", screen.slug()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AchqError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(AchqError::Io)?;
        let value = serde_json::from_str(&content).map_err(AchqError::Serialization)?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(AchqError::Serialization)?;
        fs::write(path, content).map_err(AchqError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_records<R: DeserializeOwned>(&self, screen: Screen) -> Result<Vec<R>> {
        Ok(Self::read_json(&self.records_path(screen))?.unwrap_or_default())
    }

    fn save_records<R: Serialize>(&mut self, screen: Screen, records: &[R]) -> Result<()> {
        self.write_json(&self.records_path(screen), records)
    }

    fn load_session(&self, screen: Screen) -> Result<SessionState> {
        Ok(Self::read_json(&self.session_path(screen))?.unwrap_or_default())
    }

    fn save_session(&mut self, screen: Screen, state: &SessionState) -> Result<()> {
        self.write_json(&self.session_path(screen), state)
    }

    fn has_records(&self, screen: Screen) -> Result<bool> {
        Ok(self.records_path(screen).exists())
    }
}
