//! # Records
//!
//! The query engine never sees a concrete list-item type. Each list screen hands it
//! something implementing [`Record`], a small accessor view that exposes only what the
//! filter and sort stages read.
//!
//! Two shapes ship with the dashboard:
//! - [`Achievement`]: papers, books, patents, awards and appraisals
//! - [`ReviewProject`]: ethics-review projects on the meeting and track review screens
//!
//! Field names used by filters are flat strings; nested fields use a dotted path
//! (`author.id`, `project.id`).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Rank of an academic level. Higher is more prestigious.
///
/// 省部级 and 行业级 share a rank, so they always compare equal.
pub static LEVEL_RANKS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("国际级", 5),
        ("国家级", 4),
        ("省部级", 3),
        ("市厅级", 2),
        ("校级", 1),
        ("行业级", 3),
    ])
});

/// Unknown levels rank below every known one.
pub fn level_rank(level: &str) -> u8 {
    LEVEL_RANKS.get(level).copied().unwrap_or(0)
}

/// A value a record exposes for sorting, tagged by how it must be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Date(Option<NaiveDate>),
    Rank(u8),
}

/// Accessor view over one list item.
pub trait Record {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn date(&self) -> Option<NaiveDate>;

    /// String value of a named field, used by equality filters.
    /// `None` when the shape has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Sort key for a named field. `None` makes the field unsortable (no-op order).
    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "name" => Some(SortKey::Text(self.name())),
            "date" => Some(SortKey::Date(self.date())),
            _ => None,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn date(&self) -> Option<NaiveDate> {
        (**self).date()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        (**self).sort_key(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub date: Option<NaiveDate>,
    pub level: String,
    pub author: PersonRef,
    #[serde(default)]
    pub project: Option<ProjectRef>,
}

impl Record for Achievement {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "status" => Some(Cow::Borrowed(&self.status)),
            "level" => Some(Cow::Borrowed(&self.level)),
            "author.id" => Some(Cow::Borrowed(&self.author.id)),
            "project.id" => self.project.as_ref().map(|p| Cow::Borrowed(p.id.as_str())),
            "date" => self.date.map(|d| Cow::Owned(d.to_string())),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "name" => Some(SortKey::Text(&self.name)),
            "date" => Some(SortKey::Date(self.date)),
            "level" => Some(SortKey::Rank(level_rank(&self.level))),
            _ => None,
        }
    }
}

/// An ethics-review project as listed on the meeting and track review screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    /// Meeting date for meeting reviews, next report due date for track reviews.
    pub date: Option<NaiveDate>,
    pub applicant: PersonRef,
    pub department: String,
}

impl Record for ReviewProject {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "status" => Some(Cow::Borrowed(&self.status)),
            // Applicants fill the author slot of the advanced filter panel.
            "author.id" | "applicant.id" => Some(Cow::Borrowed(&self.applicant.id)),
            "department" => Some(Cow::Borrowed(&self.department)),
            "date" => self.date.map(|d| Cow::Owned(d.to_string())),
            _ => None,
        }
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "name" => Some(SortKey::Text(&self.name)),
            "date" => Some(SortKey::Date(self.date)),
            "status" => Some(SortKey::Text(&self.status)),
            _ => None,
        }
    }
}

/// Maps tab identifiers to the value a record's `field` must hold.
///
/// Tabs not listed here (including `"all"`) constrain nothing.
#[derive(Debug, Clone, Copy)]
pub struct TabMap {
    pub field: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl TabMap {
    pub const fn new(field: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { field, entries }
    }

    pub fn value_for(&self, tab: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tab)
            .map(|(_, value)| *value)
    }

    pub fn tabs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }
}

const ACHIEVEMENT_TABS: TabMap = TabMap::new(
    "type",
    &[
        ("academic-papers", "学术论文"),
        ("books", "学术著作"),
        ("patents", "专利"),
        ("awards", "获奖"),
        ("appraisals", "成果鉴定"),
    ],
);

const MEETING_REVIEW_TABS: TabMap = TabMap::new(
    "status",
    &[
        ("pending", "待审查"),
        ("reviewing", "审查中"),
        ("approved", "已通过"),
        ("revision", "需修改"),
    ],
);

const TRACK_REVIEW_TABS: TabMap = TabMap::new(
    "type",
    &[
        ("amendment", "修正案审查"),
        ("annual", "年度/定期审查"),
        ("safety", "安全性信息审查"),
        ("deviation", "偏离方案报告"),
        ("termination", "暂停/终止研究报告"),
        ("closure", "结题审查"),
    ],
);

/// One list screen of the dashboard. Each screen owns its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Achievements,
    MeetingReview,
    TrackReview,
}

impl Screen {
    pub fn slug(&self) -> &'static str {
        match self {
            Screen::Achievements => "achievements",
            Screen::MeetingReview => "meeting-review",
            Screen::TrackReview => "track-review",
        }
    }

    pub fn tabs(&self) -> TabMap {
        match self {
            Screen::Achievements => ACHIEVEMENT_TABS,
            Screen::MeetingReview => MEETING_REVIEW_TABS,
            Screen::TrackReview => TRACK_REVIEW_TABS,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_rank_for_provincial_and_industry_levels() {
        assert_eq!(level_rank("省部级"), level_rank("行业级"));
        assert_eq!(level_rank("国际级"), 5);
        assert_eq!(level_rank("院级"), 0);
    }

    #[test]
    fn achievement_deserializes_type_field() {
        let json = r#"{
            "id": "7", "name": "N", "type": "专利", "status": "已授权",
            "date": null, "level": "国家级",
            "author": {"id": "12", "name": "Wang"}
        }"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(a.kind, "专利");
        assert_eq!(a.date, None);
        assert!(a.project.is_none());
        assert_eq!(a.field("author.id").as_deref(), Some("12"));
        assert_eq!(a.field("project.id"), None);
    }

    #[test]
    fn unmapped_tab_has_no_value() {
        let tabs = Screen::Achievements.tabs();
        assert_eq!(tabs.value_for("patents"), Some("专利"));
        assert_eq!(tabs.value_for("all"), None);
    }
}
