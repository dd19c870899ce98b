use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, Screen};
use crate::store::DataStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::helpers::{close_session, open_session};

/// Applies a registered batch action to the current selection.
pub fn run<S, R>(store: &mut S, screen: Screen, action_id: &str) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + Serialize + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let resolved: Vec<String> = session
        .selected_records()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    let mut result = CmdResult::default().with_affected_ids(resolved);

    let outcome = session.apply_batch_action(action_id, &mut result)?;
    if outcome.selected == 0 {
        result.add_message(CmdMessage::info("Nothing selected."));
    }

    close_session(store, screen, session)?;
    Ok(result)
}
