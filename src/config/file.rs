// ABOUTME: Optional YAML settings file for repository-level defaults.
// ABOUTME: Discovered in the working directory; durations use humantime syntax.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub const CONFIG_FILENAME: &str = "vercel-wait.yml";
pub const CONFIG_FILENAME_ALT: &str = "vercel-wait.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".github/vercel-wait.yml";

/// Settings that may be committed to a repository. Never holds the token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    #[serde(default, with = "humantime_serde")]
    pub delay: Option<Duration>,

    #[serde(default, with = "humantime_serde")]
    pub initial_delay: Option<Duration>,

    #[serde(default)]
    pub canceled_as_ready: Option<bool>,

    #[serde(default)]
    pub api_url: Option<String>,
}

impl FileConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the first settings file found in `dir`, if any.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in candidates {
            if path.exists() {
                let config = Self::load(&path)?;
                return Ok(Some((path, config)));
            }
        }

        Ok(None)
    }
}
