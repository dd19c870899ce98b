//! # Batch Actions
//!
//! A batch action runs over every selected id at once. The dispatcher keeps a
//! registry of actions by id and applies one to the canonical collection:
//!
//! - `delete` drops every selected record
//! - `download`, `share`, `export` leave the collection as is
//!
//! All built-in actions clear the selection afterwards, whether or not data changed.
//! An empty selection makes any action a no-op.
//!
//! Single-record deletion goes through a two-step [`DeleteConfirmation`] instead:
//! request, then confirm or cancel.

use crate::error::{AchqError, Result};
use crate::model::Record;
use crate::notify::{Notification, Notifier};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

pub type ApplyFn<R> = fn(&Selection, Vec<R>) -> Vec<R>;

/// What one dispatch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Ids in the selection, stale ones included.
    pub selected: usize,
    /// Records the selected ids resolved to before the action ran.
    pub resolved: usize,
    pub removed: usize,
}

pub struct BatchAction<R> {
    pub id: String,
    pub apply: ApplyFn<R>,
    pub clears_selection_after: bool,
    pub describe: fn(&BatchOutcome) -> Notification,
}

impl<R> Clone for BatchAction<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            apply: self.apply,
            clears_selection_after: self.clears_selection_after,
            describe: self.describe,
        }
    }
}

impl<R> std::fmt::Debug for BatchAction<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchAction")
            .field("id", &self.id)
            .field("clears_selection_after", &self.clears_selection_after)
            .finish()
    }
}

impl<R> BatchAction<R> {
    pub fn new(
        id: impl Into<String>,
        apply: ApplyFn<R>,
        describe: fn(&BatchOutcome) -> Notification,
    ) -> Self {
        Self {
            id: id.into(),
            apply,
            clears_selection_after: true,
            describe,
        }
    }

    pub fn keep_selection(mut self) -> Self {
        self.clears_selection_after = false;
        self
    }

    pub fn run(&self, selection: &Selection, collection: Vec<R>) -> Vec<R> {
        (self.apply)(selection, collection)
    }
}

fn unchanged<R>(_: &Selection, collection: Vec<R>) -> Vec<R> {
    collection
}

/// Drops every record whose id is selected. Ids with no record are ignored.
pub fn remove_selected<R: Record>(selection: &Selection, mut collection: Vec<R>) -> Vec<R> {
    collection.retain(|r| !selection.contains(r.id()));
    collection
}

impl<R: Record> BatchAction<R> {
    pub fn delete() -> Self {
        Self::new("delete", remove_selected::<R>, |o| {
            Notification::new("Deleted", format!("{} selected record(s) deleted", o.removed))
        })
    }

    pub fn download() -> Self {
        Self::new("download", unchanged::<R>, |o| {
            Notification::new("Download started", format!("Downloading {} record(s)", o.resolved))
        })
    }

    pub fn share() -> Self {
        Self::new("share", unchanged::<R>, |o| {
            Notification::new("Shared", format!("Share link created for {} record(s)", o.resolved))
        })
    }

    pub fn export() -> Self {
        Self::new("export", unchanged::<R>, |o| {
            Notification::new("Exported", format!("{} record(s) exported", o.resolved))
        })
    }
}

/// Registry of batch actions for one record shape.
#[derive(Debug, Clone)]
pub struct BatchDispatcher<R> {
    actions: Vec<BatchAction<R>>,
}

impl<R: Record> Default for BatchDispatcher<R> {
    fn default() -> Self {
        Self {
            actions: vec![
                BatchAction::delete(),
                BatchAction::download(),
                BatchAction::share(),
                BatchAction::export(),
            ],
        }
    }
}

impl<R: Record> BatchDispatcher<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action, replacing any registered under the same id.
    pub fn register(&mut self, action: BatchAction<R>) {
        match self.actions.iter_mut().find(|a| a.id == action.id) {
            Some(existing) => *existing = action,
            None => self.actions.push(action),
        }
    }

    pub fn get(&self, id: &str) -> Option<&BatchAction<R>> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.id.as_str())
    }

    /// Applies the action `action_id` to the selected records.
    ///
    /// The collection and the selection are both updated in place. Nothing is
    /// touched when the action is unknown.
    pub fn dispatch(
        &self,
        action_id: &str,
        selection: &mut Selection,
        collection: &mut Vec<R>,
        notifier: &mut dyn Notifier,
    ) -> Result<BatchOutcome> {
        let action = self
            .get(action_id)
            .ok_or_else(|| AchqError::UnknownAction(action_id.to_string()))?;

        if selection.is_empty() {
            tracing::debug!(action = action_id, "batch action on empty selection ignored");
            return Ok(BatchOutcome::default());
        }

        let before = collection.len();
        let resolved = collection
            .iter()
            .filter(|r| selection.contains(r.id()))
            .count();
        let selected = selection.len();
        let (next_collection, next_selection) =
            selection.apply(action, std::mem::take(collection));
        *collection = next_collection;
        *selection = next_selection;

        let outcome = BatchOutcome {
            selected,
            resolved,
            removed: before.saturating_sub(collection.len()),
        };
        tracing::info!(
            action = action_id,
            selected,
            removed = outcome.removed,
            "batch action applied"
        );
        notifier.notify((action.describe)(&outcome));
        Ok(outcome)
    }
}

/// Removes the record `id` and drops only that id from the selection.
///
/// Returns the removed record, or `None` if no record had that id.
pub fn delete_one<R: Record>(
    collection: &mut Vec<R>,
    selection: &mut Selection,
    id: &str,
) -> Option<R> {
    let position = collection.iter().position(|r| r.id() == id)?;
    selection.remove(id);
    Some(collection.remove(position))
}

/// Two-step confirmation for deleting a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pending: Option<String>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` for deletion, replacing any earlier request.
    pub fn request(&mut self, id: impl Into<String>) {
        self.pending = Some(id.into());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Forgets the pending request without touching any data.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Deletes the pending record, if any, and reports it.
    pub fn confirm<R: Record>(
        &mut self,
        collection: &mut Vec<R>,
        selection: &mut Selection,
        notifier: &mut dyn Notifier,
    ) -> Option<R> {
        let id = self.pending.take()?;
        let removed = delete_one(collection, selection, &id)?;
        tracing::info!(id = %id, "record deleted");
        notifier.notify(Notification::new(
            "Deleted",
            format!("\"{}\" has been deleted", removed.name()),
        ));
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Achievement;
    use crate::seed::fixtures::achievement;

    fn records() -> Vec<Achievement> {
        vec![
            achievement("1", "学术论文", "One", None, "校级"),
            achievement("2", "学术论文", "Two", None, "校级"),
            achievement("3", "专利", "Three", None, "校级"),
        ]
    }

    fn ids(records: &[Achievement]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn delete_removes_selected_and_clears() {
        let dispatcher = BatchDispatcher::new();
        let mut selection: Selection = ["1", "2"].into_iter().collect();
        let mut notes: Vec<Notification> = Vec::new();

        let mut collection = records();
        dispatcher
            .dispatch("delete", &mut selection, &mut collection, &mut notes)
            .unwrap();
        assert_eq!(ids(&collection), vec!["3"]);
        assert!(selection.is_empty());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Deleted");
        assert_eq!(notes[0].description, "2 selected record(s) deleted");
    }

    #[test]
    fn repeated_delete_with_stale_selection_is_a_no_op() {
        let dispatcher = BatchDispatcher::new();
        let mut selection: Selection = ["1", "2"].into_iter().collect();
        let mut notes: Vec<Notification> = Vec::new();

        let mut collection = records();
        dispatcher
            .dispatch("delete", &mut selection, &mut collection, &mut notes)
            .unwrap();
        assert!(selection.is_empty());
        let once = collection.clone();

        let mut stale: Selection = ["1", "2"].into_iter().collect();
        let outcome = dispatcher
            .dispatch("delete", &mut stale, &mut collection, &mut notes)
            .unwrap();
        assert_eq!(collection, once);
        assert!(stale.is_empty());
        assert_eq!(outcome.selected, 2);
        assert_eq!(outcome.removed, 0);
        assert_eq!(notes[1].description, "0 selected record(s) deleted");
    }

    #[test]
    fn non_destructive_actions_keep_data_but_clear_selection() {
        let dispatcher = BatchDispatcher::new();
        for action in ["download", "share", "export"] {
            let mut selection: Selection = ["2"].into_iter().collect();
            let mut notes: Vec<Notification> = Vec::new();
            let mut collection = records();
            dispatcher
                .dispatch(action, &mut selection, &mut collection, &mut notes)
                .unwrap();
            assert_eq!(collection, records(), "{action}");
            assert!(selection.is_empty(), "{action}");
            assert_eq!(notes.len(), 1);
        }
    }

    #[test]
    fn empty_selection_is_tolerated() {
        let dispatcher = BatchDispatcher::new();
        let mut selection = Selection::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut collection = records();
        dispatcher
            .dispatch("delete", &mut selection, &mut collection, &mut notes)
            .unwrap();
        assert_eq!(collection.len(), 3);
        assert!(notes.is_empty());
    }

    #[test]
    fn unknown_action_is_an_error() {
        let dispatcher: BatchDispatcher<Achievement> = BatchDispatcher::new();
        let mut selection: Selection = ["1"].into_iter().collect();
        let mut collection = records();
        let result = dispatcher.dispatch(
            "archive",
            &mut selection,
            &mut collection,
            &mut Vec::<Notification>::new(),
        );
        assert!(matches!(result, Err(AchqError::UnknownAction(id)) if id == "archive"));
        assert_eq!(selection.len(), 1);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn registered_action_can_keep_selection() {
        let mut dispatcher = BatchDispatcher::new();
        let mark_reviewed = BatchAction::new(
            "mark-reviewed",
            |_, mut records: Vec<Achievement>| {
                for r in &mut records {
                    r.status = "已审核".into();
                }
                records
            },
            |o| Notification::new("Reviewed", format!("{} marked", o.resolved)),
        )
        .keep_selection();
        dispatcher.register(mark_reviewed);
        let mut selection: Selection = ["3"].into_iter().collect();
        let mut collection = records();
        let mut notes: Vec<Notification> = Vec::new();
        dispatcher
            .dispatch("mark-reviewed", &mut selection, &mut collection, &mut notes)
            .unwrap();
        assert!(collection.iter().all(|r| r.status == "已审核"));
        assert_eq!(selection.len(), 1);
        assert_eq!(dispatcher.action_ids().count(), 5);
    }

    #[test]
    fn single_delete_keeps_unrelated_selection() {
        let mut collection = records();
        let mut selection: Selection = ["1", "3"].into_iter().collect();
        let removed = delete_one(&mut collection, &mut selection, "1").unwrap();
        assert_eq!(removed.id, "1");
        assert_eq!(ids(&collection), vec!["2", "3"]);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["3"]);

        assert!(delete_one(&mut collection, &mut selection, "missing").is_none());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn confirmation_flow() {
        let mut collection = records();
        let mut selection = Selection::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut confirm = DeleteConfirmation::new();

        confirm.request("2");
        assert_eq!(confirm.pending(), Some("2"));
        assert_eq!(confirm.cancel().as_deref(), Some("2"));
        assert!(confirm
            .confirm(&mut collection, &mut selection, &mut notes)
            .is_none());
        assert_eq!(collection.len(), 3);

        confirm.request("2");
        let removed = confirm
            .confirm(&mut collection, &mut selection, &mut notes)
            .unwrap();
        assert_eq!(removed.name, "Two");
        assert_eq!(ids(&collection), vec!["1", "3"]);
        assert_eq!(confirm.pending(), None);
        assert_eq!(notes, vec![Notification::new("Deleted", "\"Two\" has been deleted")]);
    }
}
