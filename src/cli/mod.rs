// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::{build_graph, handle_forest, handle_path, handle_rank, load_config};
