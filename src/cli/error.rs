//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::domain::{DomainError, Guidance};
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),

    #[error("invalid style for '{role}' ({value}): {reason}")]
    InvalidStyle {
        role: String,
        value: String,
        reason: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Infra(InfraError::Domain(e))
    }
}

impl From<clap::Error> for CliError {
    /// Keeps the first paragraph of clap's report (usage block dropped),
    /// folded onto one line without its `error: ` prefix.
    fn from(e: clap::Error) -> Self {
        let rendered = e.render().to_string();
        let message = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        CliError::Usage(message.trim_start_matches("error: ").to_string())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure is reported as a plain `1`.
    pub fn exit_code(&self) -> i32 {
        crate::exitcode::FAILURE
    }

    /// The panel shown for this error: its own guidance for context
    /// errors, the generic "Command execution failed" panel otherwise.
    pub fn guidance(&self) -> Guidance {
        match self {
            CliError::Infra(InfraError::Domain(domain)) => domain
                .guidance()
                .cloned()
                .unwrap_or_else(|| Guidance::command_failed(domain.to_string())),
            other => Guidance::command_failed(other.to_string()),
        }
    }
}
