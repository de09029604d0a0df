//! CLI argument definitions using clap

use std::ffi::OsStr;

use clap::builder::{BoolishValueParser, PossibleValue, StringValueParser, TypedValueParser};
use clap::{Arg, ArgAction, Command, Parser, Subcommand};

use crate::cli::styles;
use crate::config::ColorMode;
use crate::domain::CATALOG;

const ROOT_LONG_ABOUT: &str = "\
Enhanced Knative func CLI with improved UX patterns

This demo showcases professional CLI improvements including:
• Clear command organization with workflow-based grouping
• Enhanced error messages with actionable guidance
• Colorized output for better visual hierarchy
• Consistent flag patterns across commands
• Progressive disclosure of complexity

Common Workflows:
  Development:  create → build → run → invoke
  Deployment:   create → build → deploy
  Events:       create → deploy → subscribe";

/// Enhanced func CLI UX Demonstration
#[derive(Parser, Debug)]
#[command(name = "func-ux-demo")]
#[command(author, version, about, long_about = styles::description(ROOT_LONG_ABOUT))]
#[command(propagate_version = true, styles = styles::help_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors (overrides config)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new function project
    #[command(
        long_about = styles::description("Create a new function project from a template.\n\n\
This command scaffolds a new function project with the specified runtime\n\
and template, setting up the basic structure needed for development."),
        after_help = styles::examples("\
Examples:
  # Create a Python HTTP function
  func-ux-demo create my-function --language python

  # Create a Go CloudEvent function
  func-ux-demo create event-handler --language go --template cloudevents

  # Create with custom registry
  func-ux-demo create api-func --language node --registry ghcr.io/myorg")
    )]
    Create {
        /// Function name
        name: Option<String>,

        /// Function runtime language (required)
        #[arg(short, long)]
        language: String,

        /// Function template type
        #[arg(short, long, default_value = "http")]
        template: String,

        /// Container registry for function images
        #[arg(short, long)]
        registry: Option<String>,
    },

    /// Run a function locally
    #[command(
        long_about = styles::description("Run a function locally for development and testing. The function can be executed\n\
either in a container or directly on the host system."),
        after_help = styles::examples("\
Examples:
  # Run function with automatic building
  func run

  # Force rebuild and run in container
  func run --build=true

  # Run on host system (Go functions only)
  func run --container=false

  # Run with custom environment
  func run --env DEBUG=true --env PORT=9000")
    )]
    Run {
        /// Run in container mode
        #[arg(
            short,
            long,
            action = ArgAction::Set,
            value_parser = BoolishValueParser::new(),
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true"
        )]
        container: bool,

        /// Build behavior: auto|true|false
        #[arg(long, default_value = "auto")]
        build: String,

        /// Container registry URL
        #[arg(short, long)]
        registry: Option<String>,

        /// Address to serve function
        #[arg(short, long, default_value = "localhost:8080")]
        address: String,

        /// Builder type: pack|s2i|host
        #[arg(short, long, default_value = "pack")]
        builder: String,
    },

    /// Deploy function to Kubernetes cluster
    #[command(
        long_about = styles::description("Deploy the function as a Knative Service to a Kubernetes cluster.\n\n\
This command builds the function container (if needed) and deploys it\n\
to the current Kubernetes context and namespace."),
        after_help = styles::examples("\
Examples:
  # Deploy with auto-build
  func-ux-demo deploy --registry ghcr.io/myorg

  # Deploy to specific namespace
  func-ux-demo deploy --registry ghcr.io/myorg --namespace production

  # Deploy without building
  func-ux-demo deploy --build=false")
    )]
    Deploy {
        /// Container registry URL (required)
        #[arg(short, long)]
        registry: String,

        /// Kubernetes namespace
        #[arg(short, long)]
        namespace: Option<String>,

        /// Build container before deploying
        #[arg(
            long,
            action = ArgAction::Set,
            value_parser = BoolishValueParser::new(),
            num_args = 0..=1,
            require_equals = true,
            default_value_t = true,
            default_missing_value = "true"
        )]
        build: bool,
    },

    /// Invoke function with test data
    #[command(
        long_about = styles::description("Invoke a function with test data for development and testing.\n\n\
Can invoke local functions or deployed functions by specifying a target URL."),
        after_help = styles::examples("\
Examples:
  # Invoke local function
  func-ux-demo invoke

  # Invoke with custom data
  func-ux-demo invoke --data '{\"name\": \"World\"}'

  # Invoke deployed function
  func-ux-demo invoke --target https://my-function.example.com")
    )]
    Invoke {
        /// Function URL (default: local)
        #[arg(short, long)]
        target: Option<String>,

        /// Request data
        #[arg(short, long, default_value = "{}")]
        data: String,

        /// Content type
        #[arg(long, default_value = "application/json")]
        content_type: String,
    },

    /// Demonstrate enhanced error handling
    #[command(long_about = error_demo_long_about())]
    ErrorDemo {
        /// Error scenario to display
        #[arg(value_name = "TYPE", value_parser = ScenarioNameParser)]
        kind: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Long help for `error-demo`, listing every catalog entry.
fn error_demo_long_about() -> clap::builder::StyledStr {
    let types: String = CATALOG
        .iter()
        .map(|entry| format!("\n  {:<18} - {}", entry.name, entry.summary))
        .collect();
    styles::description(&format!(
        "Demonstrate various enhanced error scenarios and their improved messaging.\n\n\
Available error types:{}",
        types
    ))
}

/// Accepts any scenario name but advertises the catalog names to shell
/// completion. Unknown names reach the handler, which shows the fallback.
#[derive(Clone, Debug)]
pub struct ScenarioNameParser;

impl TypedValueParser for ScenarioNameParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            CATALOG.iter().map(|entry| PossibleValue::new(entry.name)),
        ))
    }
}
