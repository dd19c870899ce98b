//! Filter stage.
//!
//! Four predicate groups, all ANDed: tab, search, quick filters, advanced filters.
//! A filter value of `"all"` or an empty string constrains nothing. The stage is
//! stable: surviving records keep their input order.

use crate::model::{Record, TabMap};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "all";

fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// Inclusive calendar-date range. Only active when both ends are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Whether a record date passes this range. Undated records never pass an
    /// active range.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => date.is_some_and(|d| from <= d && d <= to),
            _ => true,
        }
    }
}

/// The advanced filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilters {
    pub author_id: Option<String>,
    pub project_id: Option<String>,
    pub level: Option<String>,
    #[serde(default)]
    pub date_range: DateRange,
}

impl AdvancedFilters {
    fn equality_checks(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("author.id", self.author_id.as_deref()),
            ("project.id", self.project_id.as_deref()),
            ("level", self.level.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub active_tab: Option<String>,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub quick_filters: BTreeMap<String, String>,
    #[serde(default)]
    pub advanced: AdvancedFilters,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.active_tab = Some(tab.into());
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_quick(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.quick_filters.insert(field.into(), value.into());
        self
    }

    pub fn with_advanced(mut self, advanced: AdvancedFilters) -> Self {
        self.advanced = advanced;
        self
    }

    /// Whether a single record passes every predicate.
    pub fn matches<R: Record>(&self, record: &R, tabs: &TabMap) -> bool {
        self.matches_tab(record, tabs)
            && self.matches_search(record)
            && self.matches_quick(record)
            && self.matches_advanced(record)
    }

    fn matches_tab<R: Record>(&self, record: &R, tabs: &TabMap) -> bool {
        let Some(expected) = self.active_tab.as_deref().and_then(|t| tabs.value_for(t)) else {
            return true;
        };
        record.field(tabs.field).as_deref() == Some(expected)
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        record.name().to_lowercase().contains(&term)
            || record.description().to_lowercase().contains(&term)
    }

    fn matches_quick<R: Record>(&self, record: &R) -> bool {
        self.quick_filters
            .iter()
            .filter(|(_, value)| !is_unconstrained(value))
            .all(|(field, value)| record.field(field).as_deref() == Some(value.as_str()))
    }

    fn matches_advanced<R: Record>(&self, record: &R) -> bool {
        let equal = self
            .advanced
            .equality_checks()
            .into_iter()
            .all(|(field, wanted)| match wanted {
                Some(value) if !is_unconstrained(value) => {
                    record.field(field).as_deref() == Some(value)
                }
                _ => true,
            });
        equal && self.advanced.date_range.admits(record.date())
    }
}

/// Applies `spec` to `records`, keeping input order.
pub fn filter<'a, R: Record>(records: &'a [R], spec: &FilterSpec, tabs: &TabMap) -> Vec<&'a R> {
    let kept: Vec<&R> = records.iter().filter(|r| spec.matches(*r, tabs)).collect();
    tracing::debug!(total = records.len(), kept = kept.len(), "filter applied");
    kept
}
