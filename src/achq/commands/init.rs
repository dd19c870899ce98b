use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Screen;
use crate::seed;
use crate::store::{DataStore, SessionState};

const SCREENS: [Screen; 3] = [Screen::Achievements, Screen::MeetingReview, Screen::TrackReview];

/// Writes the seed collections. Screens that already have data are left alone
/// unless `force` is set, which also resets their session state.
pub fn run<S: DataStore>(store: &mut S, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for screen in SCREENS {
        if store.has_records(screen)? && !force {
            result.add_message(CmdMessage::info(format!("{}: already initialized", screen)));
            continue;
        }
        let count = match screen {
            Screen::Achievements => {
                let records = seed::achievements();
                store.save_records(screen, &records)?;
                records.len()
            }
            Screen::MeetingReview => {
                let records = seed::meeting_reviews();
                store.save_records(screen, &records)?;
                records.len()
            }
            Screen::TrackReview => {
                let records = seed::track_reviews();
                store.save_records(screen, &records)?;
                records.len()
            }
        };
        store.save_session(screen, &SessionState::default())?;
        tracing::info!(%screen, count, "seeded screen");
        result.add_message(CmdMessage::success(format!(
            "{}: {} record(s) loaded",
            screen, count
        )));
    }

    Ok(result)
}
