//! View state for one list screen.
//!
//! [`ListView`] is the caller-level half of the pipeline: it remembers the current
//! filter, sort and page between renders. Changing what is shown (tab, search, quick
//! or advanced filters) sends the user back to page 1. Changing the sort order keeps
//! the current page.

use super::filter::{AdvancedFilters, FilterSpec};
use super::page::{PageRequest, DEFAULT_PAGE_SIZE};
use super::sort::SortSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListView {
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            sort,
            page_size,
            ..Self::default()
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    pub fn set_tab(&mut self, tab: Option<String>) {
        self.filter.active_tab = tab;
        self.page = 1;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.page = 1;
    }

    pub fn set_quick_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filter.quick_filters.insert(field.into(), value.into());
        self.page = 1;
    }

    pub fn set_advanced(&mut self, advanced: AdvancedFilters) {
        self.filter.advanced = advanced;
        self.page = 1;
    }

    /// Clears every filter, back to page 1.
    pub fn reset_filters(&mut self) {
        self.filter = FilterSpec::default();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_page_three() -> ListView {
        let mut view = ListView::default();
        view.set_page(3);
        view
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut view = at_page_three();
        view.set_search("deep");
        assert_eq!(view.page, 1);

        let mut view = at_page_three();
        view.set_tab(Some("patents".into()));
        assert_eq!(view.page, 1);

        let mut view = at_page_three();
        view.set_quick_filter("status", "已发表");
        assert_eq!(view.page, 1);

        let mut view = at_page_three();
        view.set_advanced(AdvancedFilters {
            level: Some("国家级".into()),
            ..Default::default()
        });
        assert_eq!(view.page, 1);
    }

    #[test]
    fn sort_change_keeps_page() {
        let mut view = at_page_three();
        view.set_sort(SortSpec::asc("name"));
        assert_eq!(view.page, 3);
    }

    #[test]
    fn page_never_below_one() {
        let mut view = ListView::default();
        view.set_page(0);
        assert_eq!(view.page, 1);
    }
}
