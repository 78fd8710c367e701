//! Text-menu interaction layer that drives the directory.

pub mod formatting;
pub mod io;
pub mod output;
mod shell;

pub use shell::{run_cli, CliError, CliMode, ShellContext};
