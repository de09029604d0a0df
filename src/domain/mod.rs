//! Domain layer: languages, run modes, guidance and static catalogs
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod error;
pub mod guidance;
pub mod language;
pub mod project;
pub mod scenario;

pub use catalog::{CommandInfo, HelpCategory, WORKFLOW_CATEGORIES};
pub use error::DomainError;
pub use guidance::Guidance;
pub use language::{Language, RunMode, PACK_BUILDER};
pub use project::MARKER_FILES;
pub use scenario::{ErrorScenario, ScenarioEntry, CATALOG};
