use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Target, DEFAULT_PREFIX};
use crate::error::{GitSemverError, Result};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "gitsemver.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".gitsemver.toml";

/// Represents the complete configuration for git-semver.
///
/// Every value can be overridden on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Which tags are considered and how their names are read.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Prefix recognized and stripped from tag names
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Glob that tag names must match
    #[serde(default)]
    pub pattern: Option<String>,

    /// Only consider tags that are valid semantic versions
    #[serde(default)]
    pub semver_only: bool,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_prefix(),
            pattern: None,
            semver_only: false,
        }
    }
}

/// How the derived version is presented.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub target: Target,

    /// Ignore shorthand formats when the version carries a pre-release
    #[serde(default)]
    pub guard: bool,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GitSemverError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in current directory
/// 3. `.gitsemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        GitSemverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    Config::from_toml(&text).map_err(|e| match e {
        GitSemverError::Config(msg) => {
            GitSemverError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
