//! Function runtimes and builders

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Runtime a function project can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Python,
    Node,
    Java,
    Rust,
}

impl Language {
    /// All supported runtimes, in display order.
    pub const ALL: [Language; 5] = [
        Language::Go,
        Language::Python,
        Language::Node,
        Language::Java,
        Language::Rust,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::Node => "node",
            Language::Java => "java",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    /// Exact, case-sensitive match against the supported set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| DomainError::InvalidLanguage(s.to_string()))
    }
}

/// The one builder that cannot run on the host. Any other builder name is
/// passed through untouched.
pub const PACK_BUILDER: &str = "pack";

/// Outcome of reconciling `--builder` with `--container`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMode {
    pub container: bool,
    /// Set when the requested container flag had to be overridden.
    pub forced_container: bool,
}

impl RunMode {
    /// `pack` only builds inside a container: a host run gets upgraded.
    pub fn resolve(builder: &str, container: bool) -> Self {
        if builder == PACK_BUILDER && !container {
            return RunMode {
                container: true,
                forced_container: true,
            };
        }
        RunMode {
            container,
            forced_container: false,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.container {
            "Container"
        } else {
            "Source"
        }
    }
}
