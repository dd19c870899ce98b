use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use crate::model::{Record, Screen};
use crate::query::ListView;
use crate::store::DataStore;
use serde::de::DeserializeOwned;

use super::helpers::{open_session, save_state};

/// Flips the selection state of each id.
pub fn toggle<S, R>(store: &mut S, screen: Screen, ids: &[&str]) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let mut result = CmdResult::default();

    for id in ids {
        if !session.records().iter().any(|r| r.id() == *id) {
            result.add_message(CmdMessage::warning(format!("No record with id {}", id)));
            continue;
        }
        let now_selected = session.toggle_select(id);
        let verb = if now_selected { "Selected" } else { "Deselected" };
        result.add_message(CmdMessage::info(format!("{} {}", verb, id)));
        result.affected_ids.push(id.to_string());
    }
    result.add_message(CmdMessage::info(format!(
        "{} record(s) selected",
        session.selection().len()
    )));

    save_state(store, screen, session)?;
    Ok(result)
}

/// Deselects each id. Unlike [`toggle`], never selects anything.
pub fn unselect<S, R>(store: &mut S, screen: Screen, ids: &[&str]) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let mut result = CmdResult::default();

    for id in ids {
        if session.deselect(id) {
            result.add_message(CmdMessage::info(format!("Deselected {}", id)));
            result.affected_ids.push(id.to_string());
        } else {
            result.add_message(CmdMessage::warning(format!("{} was not selected", id)));
        }
    }
    result.add_message(CmdMessage::info(format!(
        "{} record(s) selected",
        session.selection().len()
    )));

    save_state(store, screen, session)?;
    Ok(result)
}

/// Selects every record the view's filters match, across all pages.
pub fn all_matching<S, R>(store: &mut S, screen: Screen, view: ListView) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?.with_view(view);
    let count = session.select_all_matching();
    let ids = session.selection().iter().map(str::to_string).collect();
    save_state(store, screen, session)?;

    let mut result = CmdResult::default().with_affected_ids(ids);
    result.add_message(CmdMessage::info(format!("{} record(s) selected", count)));
    Ok(result)
}

pub fn clear<S, R>(store: &mut S, screen: Screen) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let cleared = session.selection().len();
    session.clear_selection();
    save_state(store, screen, session)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Cleared {} selection(s)", cleared)));
    Ok(result)
}

/// Lists the selected records, whatever the current filters.
pub fn show<S, R>(store: &S, screen: Screen) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let session = open_session::<S, R>(store, screen)?;
    let listed = session
        .selected_records()
        .into_iter()
        .map(|r| ListedRecord::from_record(r, true))
        .collect();
    let stale: Vec<String> = session
        .selection()
        .iter()
        .filter(|id| !session.records().iter().any(|r| r.id() == *id))
        .map(str::to_string)
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    if !stale.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Selected but no longer present: {}",
            stale.join(", ")
        )));
    }
    Ok(result)
}
