//! # Query Engine
//!
//! The list pipeline shared by every screen:
//!
//! ```text
//! records ──▶ filter ──▶ sort ──▶ paginate ──▶ Page { items, total_items }
//! ```
//!
//! Every stage is pure and recomputed in full on each call. The engine borrows the
//! caller's collection and returns references into it; it never owns or mutates
//! records. Selection and batch mutations live outside this pipeline (see
//! [`crate::selection`] and [`crate::batch`]).

use crate::error::Result;
use crate::model::{Record, TabMap};

pub mod filter;
pub mod page;
pub mod sort;
pub mod view;

pub use filter::{AdvancedFilters, DateRange, FilterSpec, ALL};
pub use page::{Page, PageRequest};
pub use sort::{SortDirection, SortSpec};
pub use view::ListView;

/// Filters, sorts and slices `records`.
pub fn run<'a, R: Record>(
    records: &'a [R],
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
    request: PageRequest,
    tabs: &TabMap,
) -> Result<Page<&'a R>> {
    let mut matched = filter::filter(records, filter_spec, tabs);
    sort::sort(&mut matched, sort_spec);
    let page = page::paginate(matched, request)?;
    tracing::debug!(
        sort = %sort_spec,
        page = page.page,
        shown = page.items.len(),
        total = page.total_items,
        "query evaluated"
    );
    Ok(page)
}

/// Runs the pipeline for the state held by a [`ListView`].
pub fn run_view<'a, R: Record>(
    records: &'a [R],
    view: &ListView,
    tabs: &TabMap,
) -> Result<Page<&'a R>> {
    run(records, &view.filter, &view.sort, view.page_request(), tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Achievement, Screen};
    use crate::seed::fixtures::achievement;

    fn ids<R: Record>(records: &[R]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn end_to_end_filter_sort_page() {
        let records = vec![
            achievement("1", "学术论文", "A", Some("2023-01-01"), "国家级"),
            achievement("2", "学术论文", "B", None, "国际级"),
            achievement("3", "专利", "C", Some("2023-06-01"), "省部级"),
        ];
        let spec = FilterSpec::new().with_quick("type", "学术论文");
        let page = run(
            &records,
            &spec,
            &"level_desc".parse().unwrap(),
            PageRequest::new(1, 10),
            &Screen::Achievements.tabs(),
        )
        .unwrap();

        assert_eq!(ids(&page.items), vec!["2", "1"]);
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn total_counts_filtered_records() {
        let records: Vec<Achievement> = (1..=20)
            .map(|i| {
                let kind = if i % 4 == 0 { "专利" } else { "学术论文" };
                achievement(&i.to_string(), kind, &format!("r{i}"), None, "校级")
            })
            .collect();
        let spec = FilterSpec::new().with_tab("patents");
        let page = run(
            &records,
            &spec,
            &SortSpec::default(),
            PageRequest::new(1, 10),
            &Screen::Achievements.tabs(),
        )
        .unwrap();

        assert_eq!(page.total_items, 5);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn search_change_returns_to_first_page() {
        let records: Vec<Achievement> = (1..=35)
            .map(|i| achievement(&i.to_string(), "学术论文", &format!("paper {i}"), None, "校级"))
            .collect();
        let tabs = Screen::Achievements.tabs();
        let mut view = ListView::new(SortSpec::asc("name"), 10);
        view.set_page(3);
        assert_eq!(run_view(&records, &view, &tabs).unwrap().page, 3);

        view.set_search("paper 1");
        let page = run_view(&records, &view, &tabs).unwrap();
        assert_eq!(page.page, 1);
        // "paper 1" and "paper 10".."paper 19"
        assert_eq!(page.total_items, 11);
    }

    #[test]
    fn sort_change_keeps_page_through_pipeline() {
        let records: Vec<Achievement> = (1..=30)
            .map(|i| achievement(&i.to_string(), "学术论文", &format!("n{i}"), None, "校级"))
            .collect();
        let tabs = Screen::Achievements.tabs();
        let mut view = ListView::default();
        view.set_page(3);
        view.set_sort(SortSpec::asc("name"));
        let page = run_view(&records, &view, &tabs).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 10);
    }
}
