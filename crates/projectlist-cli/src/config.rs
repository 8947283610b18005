//! CLI configuration, read from a TOML file.
//!
//! Every key is optional; missing keys fall back to [`Config::default`].
//!
//! ```toml
//! document = "codev/projectlist.md"
//! format = "table"
//! group_statuses = ["implementing", "specified", "on-hold"]
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use projectlist::ProjectStatus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "projectlist.toml";

/// Project list read when neither config nor flags name one.
pub const DEFAULT_DOCUMENT: &str = "codev/projectlist.md";

/// How records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text columns.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// An HTML fragment with every field escaped.
    Html,
}

/// Settings for the `projectlist` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the project list document.
    pub document: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// Statuses shown by `groups`, in display order.
    pub group_statuses: Vec<ProjectStatus>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            format: OutputFormat::default(),
            group_statuses: ProjectStatus::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, document: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if let Some(document) = document {
            self.document = document;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
