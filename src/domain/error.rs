//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Guidance;

/// Domain errors represent flag and context violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid language '{0}'")]
    InvalidLanguage(String),

    #[error("not in function directory")]
    NotInFunctionDirectory { dir: PathBuf, guidance: Guidance },

    #[error("no function to invoke")]
    NoFunctionToInvoke { dir: PathBuf, guidance: Guidance },
}

impl DomainError {
    /// Context errors carry their own remedy list; flag errors do not.
    pub fn guidance(&self) -> Option<&Guidance> {
        match self {
            DomainError::NotInFunctionDirectory { guidance, .. }
            | DomainError::NoFunctionToInvoke { guidance, .. } => Some(guidance),
            _ => None,
        }
    }
}
