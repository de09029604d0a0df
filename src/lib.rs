//! func-ux-demo: a demonstration shell for a function development CLI.
//!
//! Renders styled help, simulated command output and actionable error
//! panels. No command performs real work.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
