//! # Achq Architecture
//!
//! Achq is the list engine behind the research-achievement and ethics-review
//! screens of an admin dashboard. Every list screen needs the same things:
//! filter the collection, sort it, page it, let the user select rows across pages
//! and run batch actions on them. Achq does that once, generically, for any record
//! shape that implements [`model::Record`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Load a screen's session from the store, run, save back   │
//! │  - Return `Result<CmdResult>`                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (query/, selection, batch, session)                 │
//! │  - Pure, synchronous, in-memory                             │
//! │  - filter → sort → paginate; selection; batch actions       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Engine Rules Worth Knowing
//!
//! - Filters are ANDed; `"all"` or an empty value means unconstrained.
//! - Sorting is stable. Missing dates sort last ascending and first descending.
//! - Changing any filter returns the view to page 1; changing the sort does not.
//! - Selection is a flat id set. It outlives filter, sort and page changes and is
//!   cleared by every built-in batch action.
//! - Mutations report through an injected [`notify::Notifier`].
//!
//! ## Testing Strategy
//!
//! Engine modules carry the bulk of the unit tests. Commands are tested against
//! `InMemoryStore`. The binary is covered by `assert_cmd` tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the CLI
//! - [`commands`]: one module per operation
//! - [`query`]: filter, sort, paginate, view state
//! - [`selection`], [`batch`], [`session`]: selection and mutations
//! - [`notify`]: notification port
//! - [`model`]: `Record` trait, record shapes, screens
//! - [`store`]: storage abstraction
//! - [`seed`]: mock collections
//! - [`config`], [`error`]

pub mod api;
pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod query;
pub mod seed;
pub mod selection;
pub mod session;
pub mod store;
