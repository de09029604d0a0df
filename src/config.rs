//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/func-ux-demo/func-ux-demo.toml`
//! 3. Environment variables: `FUNC_UX_DEMO_*` prefix
//! 4. `--color` on the command line (applied by the caller)
//!
//! Settings only shape presentation; they never change what a command does.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::infrastructure::InfraError;

pub const APP_NAME: &str = "func-ux-demo";
pub const ENV_PREFIX: &str = "FUNC_UX_DEMO";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the terminal decide (honors NO_COLOR / CLICOLOR)
    #[default]
    Auto,
    Always,
    Never,
}

/// Style strings for each role of the presentation layer.
///
/// A style is a color name followed by optional modifiers,
/// e.g. `"yellow bold underline"` or `"bright_blue"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteSettings {
    pub error: String,
    pub warning: String,
    pub success: String,
    pub command: String,
    pub flag: String,
    pub example: String,
    pub description: String,
    pub header: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            error: "red bold".into(),
            warning: "yellow bold".into(),
            success: "green bold".into(),
            command: "cyan bold".into(),
            flag: "blue".into(),
            example: "magenta".into(),
            description: "white".into(),
            header: "yellow bold underline".into(),
        }
    }
}

/// Raw palette for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPaletteSettings {
    pub error: Option<String>,
    pub warning: Option<String>,
    pub success: Option<String>,
    pub command: Option<String>,
    pub flag: Option<String>,
    pub example: Option<String>,
    pub description: Option<String>,
    pub header: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<ColorMode>,
    #[serde(default)]
    pub palette: RawPaletteSettings,
}

impl PaletteSettings {
    /// Overlay wins field by field when specified.
    pub fn merge(&self, overlay: &RawPaletteSettings) -> Self {
        let pick = |o: &Option<String>, base: &String| o.clone().unwrap_or_else(|| base.clone());
        Self {
            error: pick(&overlay.error, &self.error),
            warning: pick(&overlay.warning, &self.warning),
            success: pick(&overlay.success, &self.success),
            command: pick(&overlay.command, &self.command),
            flag: pick(&overlay.flag, &self.flag),
            example: pick(&overlay.example, &self.example),
            description: pick(&overlay.description, &self.description),
            header: pick(&overlay.header, &self.header),
        }
    }
}

/// Unified configuration for func-ux-demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Color output mode
    pub color: ColorMode,
    /// Text styles
    pub palette: PaletteSettings,
}

/// Get the XDG config directory for func-ux-demo.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, InfraError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| InfraError::config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| InfraError::config(format!("parse {}: {}", path.display(), e)))
}

fn config_err(e: ConfigError) -> InfraError {
    InfraError::config(e.to_string())
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            palette: self.palette.merge(&overlay.palette),
        }
    }

    /// Load settings from the XDG config location plus environment.
    pub fn load() -> Result<Self, InfraError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `global_path` - Config file to layer over defaults; skipped when
    ///   `None` or missing on disk
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, InfraError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply FUNC_UX_DEMO_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`: `FUNC_UX_DEMO_PALETTE__ERROR="red"`.
    fn apply_env_overrides(settings: Self) -> Result<Self, InfraError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let raw: RawSettings = config.try_deserialize().map_err(config_err)?;
        Ok(settings.merge_with(&raw))
    }
}
