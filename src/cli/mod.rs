//! CLI layer: argument parsing, command dispatch and styled output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod palette;
pub mod styles;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
pub use output::Output;
pub use palette::{Paint, Palette};
