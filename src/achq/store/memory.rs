use super::{DataStore, SessionState};
use crate::error::Result;
use crate::model::Screen;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<Screen, serde_json::Value>,
    sessions: HashMap<Screen, SessionState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_records<R: DeserializeOwned>(&self, screen: Screen) -> Result<Vec<R>> {
        match self.records.get(&screen) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(Vec::new()),
        }
    }

    fn save_records<R: Serialize>(&mut self, screen: Screen, records: &[R]) -> Result<()> {
        self.records.insert(screen, serde_json::to_value(records)?);
        Ok(())
    }

    fn load_session(&self, screen: Screen) -> Result<SessionState> {
        Ok(self.sessions.get(&screen).cloned().unwrap_or_default())
    }

    fn save_session(&mut self, screen: Screen, state: &SessionState) -> Result<()> {
        self.sessions.insert(screen, state.clone());
        Ok(())
    }

    fn has_records(&self, screen: Screen) -> Result<bool> {
        Ok(self.records.contains_key(&screen))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::seed;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Loads the seed collections for every screen.
        pub fn seeded(mut self) -> Self {
            self.store
                .save_records(Screen::Achievements, &seed::achievements())
                .unwrap();
            self.store
                .save_records(Screen::MeetingReview, &seed::meeting_reviews())
                .unwrap();
            self.store
                .save_records(Screen::TrackReview, &seed::track_reviews())
                .unwrap();
            self
        }

        pub fn with_records<R: Serialize>(mut self, screen: Screen, records: &[R]) -> Self {
            self.store.save_records(screen, records).unwrap();
            self
        }
    }
}
