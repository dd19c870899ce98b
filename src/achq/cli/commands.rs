//! # CLI Layer
//!
//! The terminal client for achq. This is the only place that parses arguments, prints,
//! and picks where data lives on disk. Everything else goes through [`AchqApi`], which
//! hands back a [`CmdResult`] for the functions in `render` to format.
//!
//! - `run()`: parses, sets up logging and context, dispatches
//! - `init_context()`: resolves the data directory and builds the API over a [`FileStore`]
//! - `handle_*()`: one per subcommand

use super::logging;
use super::render::{print_messages, print_page_info, print_records, print_tabs};
use super::setup::{Cli, Commands, ViewArgs};
use achq::api::{AchqApi, CmdResult, ConfigAction};
use achq::config::AchqConfig;
use achq::error::{AchqError, Result};
use achq::model::Screen;
use achq::query::{AdvancedFilters, DateRange, ListView, SortSpec};
use achq::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform data directory.
const HOME_ENV: &str = "ACHQ_HOME";

struct AppContext {
    api: AchqApi<FileStore>,
    screen: Screen,
    config: AchqConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init { force }) => handle_init(&mut ctx, force),
        Some(Commands::List(view)) => handle_list(&mut ctx, view),
        Some(Commands::Tabs) => handle_tabs(&ctx),
        Some(Commands::Select { ids, all, view }) => handle_select(&mut ctx, ids, all, view),
        Some(Commands::Unselect { ids }) => handle_unselect(&mut ctx, ids),
        Some(Commands::Selection) => handle_selection(&mut ctx),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Batch { action, out_dir }) => handle_batch(&mut ctx, &action, &out_dir),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        Some(Commands::Confirm) => handle_confirm(&mut ctx),
        Some(Commands::Cancel) => handle_cancel(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, ViewArgs::default()),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "achq", "achq")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AchqError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = data_dir()?;
    tracing::debug!(root = %root.display(), "using data directory");

    let config = AchqConfig::load(&root)?;
    let store = FileStore::new(root.clone());

    Ok(AppContext {
        api: AchqApi::new(store, root),
        screen: cli.screen.into(),
        config,
    })
}

/// Builds the list view from flags, falling back to configured sort and page size.
fn build_view(config: &AchqConfig, args: ViewArgs) -> Result<ListView> {
    let sort = match args.sort.as_deref() {
        Some(raw) => SortSpec::from(raw),
        None => config.sort(),
    };
    let page_size = args.page_size.unwrap_or(config.page_size);
    if page_size == 0 {
        return Err(AchqError::InvalidPageSize);
    }

    let mut view = ListView::new(sort, page_size);
    view.set_tab(args.tab);
    if let Some(term) = args.search {
        view.set_search(term);
    }
    for (field, value) in args.filters {
        view.set_quick_filter(field, value);
    }

    let date_range = match (args.from, args.to) {
        (Some(from), Some(to)) => DateRange::new(from, to),
        (None, None) => DateRange::default(),
        _ => {
            return Err(AchqError::Api(
                "--from and --to must be given together".to_string(),
            ))
        }
    };
    view.set_advanced(AdvancedFilters {
        author_id: args.author,
        project_id: args.project,
        level: args.level,
        date_range,
    });

    // Filter setters reset the page, so the requested page goes last.
    view.set_page(args.page);
    Ok(view)
}

fn print_result(result: &CmdResult) {
    if !result.listed.is_empty() {
        print_records(&result.listed);
    }
    print_messages(&result.messages);
}

fn handle_init(ctx: &mut AppContext, force: bool) -> Result<()> {
    let result = ctx.api.init(force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, args: ViewArgs) -> Result<()> {
    let view = build_view(&ctx.config, args)?;
    let result = ctx.api.list(ctx.screen, view)?;

    print_records(&result.listed);
    if let Some(info) = &result.page_info {
        print_page_info(info);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_tabs(ctx: &AppContext) -> Result<()> {
    print_tabs(ctx.screen);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, ids: Vec<String>, all: bool, args: ViewArgs) -> Result<()> {
    let result = if all {
        let view = build_view(&ctx.config, args)?;
        ctx.api.select_matching(ctx.screen, view)?
    } else {
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        ctx.api.toggle_select(ctx.screen, &ids)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_unselect(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    let result = ctx.api.unselect(ctx.screen, &ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_selection(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.selection(ctx.screen)?;
    if result.listed.is_empty() {
        println!("Nothing selected.");
    }
    print_result(&result);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_selection(ctx.screen)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_batch(ctx: &mut AppContext, action: &str, out_dir: &Path) -> Result<()> {
    let result = ctx.api.batch(ctx.screen, action, out_dir)?;
    print_messages(&result.messages);
    for path in &result.output_paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>, yes: bool) -> Result<()> {
    let result = if yes {
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        ctx.api.delete_now(ctx.screen, &ids)?
    } else {
        match ids.as_slice() {
            [id] => ctx.api.request_delete(ctx.screen, id)?,
            _ => {
                return Err(AchqError::Api(
                    "Deleting several records needs --yes (or select them and run `achq batch delete`)"
                        .to_string(),
                ))
            }
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_confirm(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.confirm_delete(ctx.screen)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cancel(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.cancel_delete(ctx.screen)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
