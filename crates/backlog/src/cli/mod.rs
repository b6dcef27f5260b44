//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the backlog binary.

mod commands;
mod generate;
mod key;

pub use commands::{Cli, Commands};
pub use generate::{build_client, run_generation};
pub use key::handle_key_command;
