use achq::error::AchqError;
use achq::model::Screen;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Achievements,
    MeetingReview,
    TrackReview,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Achievements => Screen::Achievements,
            ScreenArg::MeetingReview => Screen::MeetingReview,
            ScreenArg::TrackReview => Screen::TrackReview,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "achq", bin_name = "achq", version)]
#[command(about = "Filter, sort, page and batch-edit research achievement lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// List screen to operate on
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = ScreenArg::Achievements,
        help_heading = "Options"
    )]
    pub screen: ScreenArg,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Filter, sort and page flags shared by `list` and `select --all`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Tab to show (e.g. academic-papers, patents, pending)
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Case-insensitive text to find in name or description
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Quick filter as FIELD=VALUE, repeatable (VALUE "all" disables it)
    #[arg(short, long = "filter", value_parser = parse_key_value)]
    pub filters: Vec<(String, String)>,

    /// Author (or applicant) id
    #[arg(long)]
    pub author: Option<String>,

    /// Project id
    #[arg(long)]
    pub project: Option<String>,

    /// Level (e.g. 国家级)
    #[arg(long)]
    pub level: Option<String>,

    /// Earliest date, inclusive (YYYY-MM-DD); needs --to
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest date, inclusive (YYYY-MM-DD); needs --from
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Sort as <field>_<asc|desc> (e.g. date_desc, level_asc, name_asc)
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the sample collections into the data directory
    Init {
        /// Overwrite existing collections and reset selections
        #[arg(long)]
        force: bool,
    },

    /// List records
    #[command(alias = "ls")]
    List(ViewArgs),

    /// Show the tabs of the current screen
    Tabs,

    /// Toggle selection of records, or select everything matching filters
    #[command(alias = "sel")]
    Select {
        /// Record ids to toggle
        #[arg(required_unless_present = "all", num_args = 1..)]
        ids: Vec<String>,

        /// Select every record matching the filters, on all pages
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Deselect records
    Unselect {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show selected records
    Selection,

    /// Clear the selection
    Clear,

    /// Run a batch action (delete, download, share, export) on the selection
    Batch {
        action: String,

        /// Where `export` writes its archive
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Delete records (asks for confirmation unless --yes)
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Delete right away
        #[arg(short, long)]
        yes: bool,
    },

    /// Confirm the pending delete
    Confirm,

    /// Cancel the pending delete
    Cancel,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, default-sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AchqError::InvalidDate(s.into()).to_string())
}
