use crate::config::AchqConfig;
use crate::model::Record;
use crate::notify::{Notification, Notifier};
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod batch;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod init;
pub mod list;
pub mod select;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record flattened for display, independent of its concrete shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: String,
    pub date: Option<NaiveDate>,
    /// Level for achievements, department for review projects.
    pub detail: String,
    pub selected: bool,
}

impl ListedRecord {
    pub fn from_record<R: Record>(record: &R, selected: bool) -> Self {
        let text = |name: &str| record.field(name).map(|v| v.into_owned()).unwrap_or_default();
        let detail = record
            .field("level")
            .or_else(|| record.field("department"))
            .map(|v| v.into_owned())
            .unwrap_or_default();
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            kind: text("type"),
            status: text("status"),
            date: record.date(),
            detail,
            selected,
        }
    }
}

/// Paging numbers for a listed page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedRecord>,
    pub page_info: Option<PageInfo>,
    pub affected_ids: Vec<String>,
    pub output_paths: Vec<PathBuf>,
    pub config: Option<AchqConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedRecord>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_page_info(mut self, info: PageInfo) -> Self {
        self.page_info = Some(info);
        self
    }

    pub fn with_affected_ids(mut self, ids: Vec<String>) -> Self {
        self.affected_ids = ids;
        self
    }

    pub fn with_output_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.output_paths = paths;
        self
    }

    pub fn with_config(mut self, config: AchqConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Engine notifications become success messages.
impl Notifier for CmdResult {
    fn notify(&mut self, notification: Notification) {
        self.add_message(CmdMessage::success(notification.to_string()));
    }
}
