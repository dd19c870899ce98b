use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AchqError, Result};
use crate::model::{Record, Screen};
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::helpers::{close_session, open_session};

/// Writes the selected records to a `.tar.gz` in `out_dir`, one JSON file each,
/// then runs the `export` batch action, which clears the selection.
///
/// No archive is written when no selected id resolves to a record, but the action
/// still runs so stale ids get cleared like any other batch action.
pub fn run<S, R>(store: &mut S, screen: Screen, out_dir: &Path) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + Serialize + DeserializeOwned,
{
    let mut session = open_session::<S, R>(store, screen)?;
    let selected = session.selected_records();
    let ids = selected.iter().map(|r| r.id().to_string()).collect();
    let mut result = CmdResult::default().with_affected_ids(ids);

    let archive = if selected.is_empty() {
        result.add_message(CmdMessage::info("No records to export."));
        None
    } else {
        let now = Utc::now();
        let filename = format!("achq-{}-{}.tar.gz", screen.slug(), now.format("%Y-%m-%d_%H%M%S"));
        let path = out_dir.join(filename);
        let file = File::create(&path).map_err(AchqError::Io)?;
        write_archive(file, screen, &selected)?;
        Some(path)
    };

    session.apply_batch_action("export", &mut result)?;
    if let Some(path) = archive {
        result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
        result.output_paths.push(path);
    }

    close_session(store, screen, session)?;
    Ok(result)
}

fn write_archive<W: Write, R: Record + Serialize>(
    writer: W,
    screen: Screen,
    records: &[&R],
) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for record in records {
        let entry_name = format!(
            "{}/{}-{}.json",
            screen.slug(),
            sanitize_filename(record.id()),
            sanitize_filename(record.name())
        );
        let content = serde_json::to_vec_pretty(record).map_err(AchqError::Serialization)?;

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_slice())
            .map_err(AchqError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(AchqError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
