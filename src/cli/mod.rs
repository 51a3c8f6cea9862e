//! Command-line interface.
//!
//! `parse_args` runs before anything else in `main`. `--version` and
//! `--help` print and exit; `--health` runs a one-shot probe instead of the
//! TUI; `--api-url` feeds the configuration.

pub mod args;
pub mod health;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use health::handle_health_command;
pub use version::{version_string, VERSION};
