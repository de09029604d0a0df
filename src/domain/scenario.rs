//! Canned error scenarios shown by `error-demo`
//!
//! Each `ErrorScenario` variant owns exactly one entry in [`CATALOG`],
//! stored at the variant's discriminant. Adding a scenario means adding a
//! variant and its entry; no dispatch code changes.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::Guidance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorScenario {
    MissingFunction = 0,
    InvalidFlag = 1,
    MissingRegistry = 2,
    FlagConflict = 3,
    DeployNoFunction = 4,
}

/// Fixed message payload for one scenario.
#[derive(Debug)]
pub struct ScenarioEntry {
    pub scenario: ErrorScenario,
    pub name: &'static str,
    pub summary: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub suggestions: &'static [&'static str],
}

pub static CATALOG: [ScenarioEntry; 5] = [
    ScenarioEntry {
        scenario: ErrorScenario::MissingFunction,
        name: "missing-function",
        summary: "Show error when not in function directory",
        title: "No function found in current directory",
        details: "This directory does not contain an initialized function project.",
        suggestions: &[
            "Create a new function:    func create --language go --template http <name>",
            "Navigate to existing function: cd /path/to/function",
            "Specify function path:     func invoke --path /path/to/function",
            "",
            "Run 'func create --help' for more information about creating functions.",
        ],
    },
    ScenarioEntry {
        scenario: ErrorScenario::InvalidFlag,
        name: "invalid-flag",
        summary: "Show error for invalid flag usage",
        title: "Unknown flag '--invalid-flag'",
        details: "The flag '--invalid-flag' is not recognized for this command.",
        suggestions: &[
            "Use --help to see available flags",
            "Did you mean: --build, --builder, or --registry?",
            "Check flag spelling and format",
        ],
    },
    ScenarioEntry {
        scenario: ErrorScenario::MissingRegistry,
        name: "missing-registry",
        summary: "Show error for missing required registry",
        title: "Container registry required",
        details: "A container registry is required to store function images during deployment.",
        suggestions: &[
            "Command flag:    func deploy --registry docker.io/username",
            "Environment:     export FUNC_REGISTRY=docker.io/username",
            "Interactive:     func deploy --confirm",
            "",
            "Popular registry options:",
            "• Docker Hub:      docker.io/username",
            "• GitHub:          ghcr.io/username",
            "• Google Cloud:    gcr.io/project-id",
            "• Azure:           username.azurecr.io",
            "",
            "Run 'func config --help' for persistent configuration options.",
        ],
    },
    ScenarioEntry {
        scenario: ErrorScenario::FlagConflict,
        name: "flag-conflict",
        summary: "Show error for conflicting flags",
        title: "Invalid flag combination",
        details: "The --builder=pack option requires container execution, but --container=false was specified.",
        suggestions: &[
            "Remove --container=false:     func run --builder=pack",
            "Use host builder:             func run --container=false --builder=host",
            "Use default configuration:    func run",
            "",
            "Note: Pack and S2I builders require container execution. Use 'host' builder for non-containerized runs.",
        ],
    },
    ScenarioEntry {
        scenario: ErrorScenario::DeployNoFunction,
        name: "deploy-no-function",
        summary: "Show error for deploy without function project",
        title: "No function project found",
        details: "This directory doesn't contain a function project that can be deployed.",
        suggestions: &[
            "Create a new function here:     func create --language python --template http myfunction",
            "Go to existing function:       cd /path/to/your/function",
            "Deploy from specific path:     func deploy --path /path/to/function",
            "",
            "What is a function project?",
            "A function project contains your code, configuration files, and metadata that",
            "func needs to build and deploy your function.",
            "",
            "Examples of creating functions:",
            "  func create --language go --template http my-go-func",
            "  func create --language node --template cloudevent my-node-func",
            "  func create --language python --template http my-python-func",
            "",
            "Run 'func create --help' to see all available languages and templates.",
        ],
    },
];

impl ErrorScenario {
    /// Used when `error-demo` is run without a type.
    pub const DEFAULT: ErrorScenario = ErrorScenario::MissingFunction;

    pub fn entry(self) -> &'static ScenarioEntry {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn guidance(self) -> Guidance {
        let entry = self.entry();
        Guidance::new(entry.title, entry.details).suggest_all(entry.suggestions.iter().copied())
    }

    pub fn all() -> impl Iterator<Item = ErrorScenario> {
        CATALOG.iter().map(|entry| entry.scenario)
    }

    /// Comma-separated scenario names, in catalog order.
    pub fn available_names() -> String {
        CATALOG.iter().map(|entry| entry.name).join(", ")
    }

    /// Guidance for a type name that matches no scenario.
    pub fn unknown(name: &str) -> Guidance {
        Guidance::new(
            "Unknown error type",
            format!("Error type '{}' is not recognized.", name),
        )
        .suggest_all([
            format!("Available types: {}", Self::available_names()),
            "Use: func-ux-demo error-demo --help".to_string(),
        ])
    }

    /// Lookup by name, falling back to the generic unknown-type message.
    pub fn resolve(name: &str) -> Guidance {
        name.parse::<ErrorScenario>()
            .map(ErrorScenario::guidance)
            .unwrap_or_else(|_| Self::unknown(name))
    }
}

impl fmt::Display for ErrorScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScenario(pub String);

impl FromStr for ErrorScenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|entry| entry.name == s)
            .map(|entry| entry.scenario)
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}
