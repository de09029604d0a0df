//! Process exit codes

/// Successful termination, including printed demo output and help
pub const OK: i32 = 0;

/// Any command failure: bad flags, unknown subcommand, missing project
pub const FAILURE: i32 = 1;
