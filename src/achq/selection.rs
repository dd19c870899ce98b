//! Row selection.
//!
//! A flat set of record ids, not tied to the current view:
//! rows stay selected when filters, sort order or page change and they drop out of
//! sight. Only batch actions and deletions change it implicitly.

use crate::batch::BatchAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id` if absent, deselects it if present. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Replaces the selection with exactly `ids`.
    pub fn set_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops a single id, leaving the rest untouched.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Runs `action` over `collection` and returns the new collection and selection.
    pub fn apply<R>(&self, action: &BatchAction<R>, collection: Vec<R>) -> (Vec<R>, Selection) {
        let collection = action.run(self, collection);
        let next = if action.clears_selection_after {
            Selection::new()
        } else {
            self.clone()
        };
        (collection, next)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
