use crate::commands::{CmdMessage, CmdResult, ListedRecord, PageInfo};
use crate::error::Result;
use crate::model::{Record, Screen};
use crate::query::ListView;
use crate::store::DataStore;
use serde::de::DeserializeOwned;

use super::helpers::open_session;

pub fn run<S, R>(store: &S, screen: Screen, view: ListView) -> Result<CmdResult>
where
    S: DataStore,
    R: Record + DeserializeOwned,
{
    let session = open_session::<S, R>(store, screen)?.with_view(view);
    let page = session.page()?;
    let selection = session.selection();

    let listed = page
        .items
        .iter()
        .map(|r| ListedRecord::from_record(*r, selection.contains(r.id())))
        .collect();
    let info = PageInfo {
        page: page.page,
        total_pages: page.total_pages(),
        total_items: page.total_items,
    };

    let mut result = CmdResult::default()
        .with_listed(listed)
        .with_page_info(info);
    if page.is_empty() && page.total_items > 0 {
        result.add_message(CmdMessage::info(format!(
            "Page {} is past the end ({} page(s) available)",
            page.page,
            info.total_pages
        )));
    }
    let hidden = selection
        .iter()
        .filter(|id| !page.items.iter().any(|r| r.id() == *id))
        .count();
    if hidden > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} selected record(s) not shown on this page",
            hidden
        )));
    }
    Ok(result)
}
