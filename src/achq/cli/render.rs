use achq::api::{CmdMessage, ListedRecord, MessageLevel, PageInfo};
use achq::model::Screen;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const KIND_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 8;
const DATE_WIDTH: usize = 10;
const DETAIL_WIDTH: usize = 10;
const SELECTED_MARKER: &str = "●";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[ListedRecord]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }
    for record in records {
        println!("{}", render_row(record));
    }
}

pub(super) fn print_page_info(info: &PageInfo) {
    println!(
        "{}",
        format!(
            "Page {}/{} ({} items)",
            info.page,
            info.total_pages.max(1),
            info.total_items
        )
        .dimmed()
    );
}

pub(super) fn print_tabs(screen: Screen) {
    let tabs = screen.tabs();
    println!("{} (by {})", screen.to_string().bold(), tabs.field);
    println!("  all");
    for tab in tabs.tabs() {
        let value = tabs.value_for(tab).unwrap_or_default();
        println!("  {} {}", pad_to_width(tab, 18), value.dimmed());
    }
}

fn render_row(record: &ListedRecord) -> String {
    let marker = if record.selected {
        format!("{} ", SELECTED_MARKER).cyan().to_string()
    } else {
        "  ".to_string()
    };
    let date = record
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let fixed = 2 + ID_WIDTH + KIND_WIDTH + STATUS_WIDTH + DATE_WIDTH + DETAIL_WIDTH + 5;
    let name_width = LINE_WIDTH.saturating_sub(fixed);

    format!(
        "{}{} {} {} {} {} {}",
        marker,
        pad_to_width(&record.id, ID_WIDTH).yellow(),
        pad_to_width(&truncate_to_width(&record.name, name_width), name_width),
        pad_to_width(&truncate_to_width(&record.kind, KIND_WIDTH), KIND_WIDTH),
        pad_to_width(&truncate_to_width(&record.status, STATUS_WIDTH), STATUS_WIDTH),
        pad_to_width(&date, DATE_WIDTH).dimmed(),
        truncate_to_width(&record.detail, DETAIL_WIDTH),
    )
}

/// Pads with spaces to `width` display columns. CJK text counts two columns per char.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
