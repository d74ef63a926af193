//! kickoff settings, read from `~/.config/kickoff/config.toml`.
//!
//! Every field is optional. With no file at all kickoff commits with the
//! message `kickoff`, renames the branch to `main`, and publishes to
//! `github.com` with `private` preselected.
//!
//! ```toml
//! app_name = "My Cool App"
//!
//! [git]
//! commit_message = "kickoff"
//! branch = "main"
//!
//! [github]
//! host = "github.com"
//! default_visibility = "private"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bootstrap::Visibility;
use crate::paths;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Application name used when `--name` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    pub git: GitSection,
    pub github: GitHubSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSection {
    pub commit_message: String,
    pub branch: String,
}

impl Default for GitSection {
    fn default() -> Self {
        Self {
            commit_message: "kickoff".to_string(),
            branch: "main".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSection {
    pub host: String,
    pub default_visibility: Visibility,
}

impl Default for GitHubSection {
    fn default() -> Self {
        Self {
            host: "github.com".to_string(),
            default_visibility: Visibility::Private,
        }
    }
}

impl Config {
    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
