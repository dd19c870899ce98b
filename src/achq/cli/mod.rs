//! # CLI Layer
//!
//! One possible UI client for achq. It is the only place that:
//! - parses arguments (`setup.rs`)
//! - wires the API to a `FileStore` and dispatches (`commands.rs`)
//! - writes to the terminal (`render.rs`)
//! - installs the tracing subscriber (`logging.rs`)

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
