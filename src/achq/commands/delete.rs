use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AchqError, Result};
use crate::model::{Record, Screen};
use crate::store::DataStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::helpers::{close_session, open_session, save_state};

/// First step of a single-record delete: remember which record to drop.
pub fn request<S, R>(store: &mut S, screen: Screen, id: &str) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let name = session
        .records()
        .iter()
        .find(|r| r.id() == id)
        .map(|r| r.name().to_string())
        .ok_or_else(|| AchqError::RecordNotFound(id.to_string()))?;
    session.request_delete(id);
    save_state(store, screen, session)?;

    let mut result = CmdResult::default().with_affected_ids(vec![id.to_string()]);
    result.add_message(CmdMessage::warning(format!(
        "Delete \"{}\"? Run `achq confirm` to delete or `achq cancel` to keep it.",
        name
    )));
    Ok(result)
}

/// Second step: delete the pending record.
pub fn confirm<S, R>(store: &mut S, screen: Screen) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + Serialize + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let mut result = CmdResult::default();

    match session.pending_delete().map(str::to_string) {
        None => result.add_message(CmdMessage::info("No delete pending.")),
        Some(id) => {
            if session.confirm_delete(&mut result).is_some() {
                result.affected_ids.push(id);
            } else {
                result.add_message(CmdMessage::info(format!(
                    "Record {} was already gone.",
                    id
                )));
            }
        }
    }

    close_session(store, screen, session)?;
    Ok(result)
}

pub fn cancel<S, R>(store: &mut S, screen: Screen) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let mut result = CmdResult::default();
    match session.cancel_delete() {
        Some(id) => result.add_message(CmdMessage::info(format!("Kept record {}", id))),
        None => result.add_message(CmdMessage::info("No delete pending.")),
    }
    save_state(store, screen, session)?;
    Ok(result)
}

/// Deletes records immediately, skipping confirmation.
///
/// One id deletes just that record and keeps the rest of the selection. Several
/// ids run as a batch delete, which clears the selection.
pub fn now<S, R>(store: &mut S, screen: Screen, ids: &[&str]) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + Serialize + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let mut result = CmdResult::default();

    match ids {
        [] => {}
        [id] => match session.delete_one(id, &mut result) {
            Some(_) => result.affected_ids.push(id.to_string()),
            None => result.add_message(CmdMessage::info(format!("No record with id {}", id))),
        },
        many => {
            let present: Vec<String> = many
                .iter()
                .filter(|id| session.records().iter().any(|r| r.id() == **id))
                .map(|id| id.to_string())
                .collect();
            session.delete_many(many.iter().copied(), &mut result)?;
            result.affected_ids = present;
        }
    }

    close_session(store, screen, session)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select;
    use crate::model::{Achievement, ReviewProject};
    use crate::store::memory::fixtures::StoreFixture;

    fn ids_in_store(store: &crate::store::memory::InMemoryStore) -> Vec<String> {
        let records: Vec<Achievement> = store.load_records(Screen::Achievements).unwrap();
        records.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn request_then_confirm_deletes() {
        let mut fixture = StoreFixture::new().seeded();
        request::<_, Achievement>(&mut fixture.store, Screen::Achievements, "3").unwrap();
        assert_eq!(ids_in_store(&fixture.store).len(), 12);

        let result = confirm::<_, Achievement>(&mut fixture.store, Screen::Achievements).unwrap();
        assert_eq!(result.affected_ids, vec!["3"]);
        assert!(!ids_in_store(&fixture.store).contains(&"3".to_string()));

        let again = confirm::<_, Achievement>(&mut fixture.store, Screen::Achievements).unwrap();
        assert!(again.affected_ids.is_empty());
        assert_eq!(again.messages[0].content, "No delete pending.");
    }

    #[test]
    fn cancel_discards_request() {
        let mut fixture = StoreFixture::new().seeded();
        request::<_, ReviewProject>(&mut fixture.store, Screen::TrackReview, "t2").unwrap();
        cancel::<_, ReviewProject>(&mut fixture.store, Screen::TrackReview).unwrap();
        let result = confirm::<_, ReviewProject>(&mut fixture.store, Screen::TrackReview).unwrap();
        assert!(result.affected_ids.is_empty());

        let records: Vec<ReviewProject> = fixture.store.load_records(Screen::TrackReview).unwrap();
        assert_eq!(records.len(), 6);
    }

    #[test]
    fn request_for_missing_record_fails() {
        let mut fixture = StoreFixture::new().seeded();
        let err = request::<_, Achievement>(&mut fixture.store, Screen::Achievements, "nope");
        assert!(matches!(err, Err(AchqError::RecordNotFound(_))));
    }

    #[test]
    fn single_delete_keeps_other_selection() {
        let mut fixture = StoreFixture::new().seeded();
        select::toggle::<_, Achievement>(&mut fixture.store, Screen::Achievements, &["1", "2"])
            .unwrap();
        now::<_, Achievement>(&mut fixture.store, Screen::Achievements, &["1"]).unwrap();

        let shown = select::show::<_, Achievement>(&fixture.store, Screen::Achievements).unwrap();
        let ids: Vec<_> = shown.listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn multi_delete_clears_selection() {
        let mut fixture = StoreFixture::new().seeded();
        select::toggle::<_, Achievement>(&mut fixture.store, Screen::Achievements, &["9"])
            .unwrap();
        let result =
            now::<_, Achievement>(&mut fixture.store, Screen::Achievements, &["1", "2", "zz"])
                .unwrap();
        assert_eq!(result.affected_ids, vec!["1", "2"]);
        assert_eq!(ids_in_store(&fixture.store).len(), 10);

        let shown = select::show::<_, Achievement>(&fixture.store, Screen::Achievements).unwrap();
        assert!(shown.listed.is_empty());
    }
}
