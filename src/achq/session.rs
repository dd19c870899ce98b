//! # List Session
//!
//! [`ListSession`] is the single owner of one screen's mutable state: the canonical
//! record collection, the selection, the pending single-record delete and the view
//! state. Reads go through [`ListSession::page`], which runs the query pipeline over
//! the current collection. All mutations take `&mut self`, so a session is never
//! observed half-updated.

use crate::batch::{BatchDispatcher, BatchOutcome, DeleteConfirmation};
use crate::error::Result;
use crate::model::{Record, TabMap};
use crate::notify::{Notification, Notifier};
use crate::query::{self, ListView, Page};
use crate::selection::Selection;

#[derive(Debug)]
pub struct ListSession<R: Record> {
    records: Vec<R>,
    tabs: TabMap,
    view: ListView,
    selection: Selection,
    confirmation: DeleteConfirmation,
    dispatcher: BatchDispatcher<R>,
}

impl<R: Record> ListSession<R> {
    pub fn new(records: Vec<R>, tabs: TabMap) -> Self {
        Self {
            records,
            tabs,
            view: ListView::default(),
            selection: Selection::new(),
            confirmation: DeleteConfirmation::new(),
            dispatcher: BatchDispatcher::new(),
        }
    }

    pub fn with_view(mut self, view: ListView) -> Self {
        self.view = view;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_confirmation(mut self, confirmation: DeleteConfirmation) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Mutable view state. Filter setters on [`ListView`] reset the page.
    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.confirmation.pending()
    }

    pub fn dispatcher_mut(&mut self) -> &mut BatchDispatcher<R> {
        &mut self.dispatcher
    }

    /// The current page of the filtered, sorted collection.
    pub fn page(&self) -> Result<Page<&R>> {
        query::run_view(&self.records, &self.view, &self.tabs)
    }

    /// Selected records that still exist, in collection order.
    pub fn selected_records(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| self.selection.contains(r.id()))
            .collect()
    }

    pub fn toggle_select(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Drops `id` from the selection. Works for ids whose record is gone.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selection.remove(id)
    }

    /// Selects every record matching the current filters, on any page.
    pub fn select_all_matching(&mut self) -> usize {
        let ids: Vec<String> = query::filter::filter(&self.records, &self.view.filter, &self.tabs)
            .into_iter()
            .map(|r| r.id().to_string())
            .collect();
        let count = ids.len();
        self.selection.set_all(ids);
        count
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Deletes one record right away. Other selected ids are kept.
    pub fn delete_one(&mut self, id: &str, notifier: &mut dyn Notifier) -> Option<R> {
        let removed = crate::batch::delete_one(&mut self.records, &mut self.selection, id)?;
        tracing::info!(id, "record deleted");
        notifier.notify(Notification::new(
            "Deleted",
            format!("\"{}\" has been deleted", removed.name()),
        ));
        Some(removed)
    }

    /// Deletes every record in `ids` as a batch, then clears the selection.
    /// No ids leaves both the records and the selection alone.
    pub fn delete_many<I, S>(&mut self, ids: I, notifier: &mut dyn Notifier) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Selection = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(0);
        }
        self.selection = ids;
        let outcome = self.apply_batch_action("delete", notifier)?;
        Ok(outcome.removed)
    }

    pub fn apply_batch_action(
        &mut self,
        action_id: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<BatchOutcome> {
        self.dispatcher
            .dispatch(action_id, &mut self.selection, &mut self.records, notifier)
    }

    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.confirmation.request(id);
    }

    pub fn confirm_delete(&mut self, notifier: &mut dyn Notifier) -> Option<R> {
        self.confirmation
            .confirm(&mut self.records, &mut self.selection, notifier)
    }

    pub fn cancel_delete(&mut self) -> Option<String> {
        self.confirmation.cancel()
    }

    /// Gives back the persistent parts: collection, selection and pending delete.
    pub fn into_parts(self) -> (Vec<R>, Selection, DeleteConfirmation) {
        (self.records, self.selection, self.confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Achievement, Screen};
    use crate::query::SortSpec;
    use crate::seed::fixtures::achievement;

    fn session() -> ListSession<Achievement> {
        let records = vec![
            achievement("1", "学术论文", "Alpha", Some("2023-01-01"), "国家级"),
            achievement("2", "学术论文", "Beta", None, "国际级"),
            achievement("3", "专利", "Gamma", Some("2023-06-01"), "省部级"),
            achievement("4", "获奖", "Delta", Some("2021-05-05"), "校级"),
        ];
        ListSession::new(records, Screen::Achievements.tabs())
    }

    fn page_ids(session: &ListSession<Achievement>) -> Vec<String> {
        session
            .page()
            .unwrap()
            .items
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut session = session();
        session.toggle_select("3");
        session.view_mut().set_tab(Some("academic-papers".into()));

        // Default date_desc puts the undated record first.
        assert_eq!(page_ids(&session), vec!["2", "1"]);
        assert!(session.selection().contains("3"));
        assert_eq!(session.selected_records().len(), 1);
    }

    #[test]
    fn batch_delete_hits_hidden_selected_rows() {
        let mut session = session();
        session.toggle_select("3");
        session.toggle_select("1");
        session.view_mut().set_tab(Some("patents".into()));
        let mut notes: Vec<Notification> = Vec::new();

        session.apply_batch_action("delete", &mut notes).unwrap();
        assert!(session.selection().is_empty());
        assert_eq!(
            session.records().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "4"]
        );
        assert!(page_ids(&session).is_empty());
    }

    #[test]
    fn delete_one_leaves_other_selection() {
        let mut session = session();
        session.toggle_select("1");
        session.toggle_select("2");
        let mut notes: Vec<Notification> = Vec::new();

        let removed = session.delete_one("1", &mut notes).unwrap();
        assert_eq!(removed.name, "Alpha");
        assert_eq!(session.selection().iter().collect::<Vec<_>>(), vec!["2"]);
        assert_eq!(notes.len(), 1);

        assert!(session.delete_one("1", &mut notes).is_none());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn delete_many_reports_removed_count() {
        let mut session = session();
        session.toggle_select("4");
        let mut notes: Vec<Notification> = Vec::new();
        let removed = session.delete_many(["1", "2", "x"], &mut notes).unwrap();
        assert_eq!(removed, 2);
        assert!(session.selection().is_empty());
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn delete_many_without_ids_keeps_selection() {
        let mut session = session();
        session.toggle_select("4");
        let mut notes: Vec<Notification> = Vec::new();
        let removed = session
            .delete_many(Vec::<String>::new(), &mut notes)
            .unwrap();
        assert_eq!(removed, 0);
        assert!(session.selection().contains("4"));
        assert_eq!(session.records().len(), 4);
        assert!(notes.is_empty());
    }

    #[test]
    fn select_all_matching_spans_pages() {
        let mut session = session();
        session.view_mut().set_page_size(1);
        session.view_mut().set_quick_filter("type", "学术论文");
        assert_eq!(session.select_all_matching(), 2);
        assert!(session.selection().contains("1"));
        assert!(session.selection().contains("2"));
        assert_eq!(session.page().unwrap().items.len(), 1);
    }

    #[test]
    fn sort_change_keeps_page_but_search_resets() {
        let mut session = session();
        session.view_mut().set_page_size(2);
        session.view_mut().set_page(2);
        session.view_mut().set_sort(SortSpec::asc("name"));
        assert_eq!(session.view().page, 2);
        assert_eq!(page_ids(&session), vec!["4", "3"]);

        session.view_mut().set_search("a");
        assert_eq!(session.view().page, 1);
    }

    #[test]
    fn confirm_then_cancel_flow() {
        let mut session = session();
        let mut notes: Vec<Notification> = Vec::new();

        session.request_delete("2");
        assert_eq!(session.pending_delete(), Some("2"));
        session.cancel_delete();
        assert!(session.confirm_delete(&mut notes).is_none());
        assert_eq!(session.records().len(), 4);

        session.request_delete("2");
        assert!(session.confirm_delete(&mut notes).is_some());
        assert_eq!(session.records().len(), 3);
        assert_eq!(notes.len(), 1);
    }
}
