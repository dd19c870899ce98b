use crate::error::Result;
use crate::model::{Record, Screen};
use crate::session::ListSession;
use crate::store::{DataStore, SessionState};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Rebuilds a screen's session from the store.
pub fn open_session<S, R>(store: &S, screen: Screen) -> Result<ListSession<R>>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let records: Vec<R> = store.load_records(screen)?;
    let state = store.load_session(screen)?;
    Ok(ListSession::new(records, screen.tabs())
        .with_selection(state.selection)
        .with_confirmation(state.confirmation))
}

/// Writes back the collection and session state after a mutation.
pub fn close_session<S, R>(store: &mut S, screen: Screen, session: ListSession<R>) -> Result<()>
where
    S: DataStore,
    R: Record + Serialize,
{
    let (records, selection, confirmation) = session.into_parts();
    store.save_records(screen, &records)?;
    store.save_session(
        screen,
        &SessionState {
            selection,
            confirmation,
        },
    )
}

/// Saves only the session state, for operations that never touch records.
pub fn save_state<S, R>(store: &mut S, screen: Screen, session: ListSession<R>) -> Result<()>
where
    S: DataStore,
    R: Record,
{
    let (_, selection, confirmation) = session.into_parts();
    store.save_session(
        screen,
        &SessionState {
            selection,
            confirmation,
        },
    )
}
