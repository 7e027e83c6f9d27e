use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::platform::github::DEFAULT_API_BASE;
use crate::utils::DEFAULT_DELIMITER;

pub const CONFIG_FILE_NAME: &str = ".extrackrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Registry file, relative to the directory the tool runs in.
    #[serde(default = "default_registry_path", alias = "externalCodeFile")]
    pub registry_path: String,
    #[serde(default = "default_comment_header")]
    pub comment_header: String,
    #[serde(default = "default_label")]
    pub label: String,
    /// Login of the account that owns the status comment.
    #[serde(default = "default_bot_login")]
    pub bot_login: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_registry_path() -> String {
    "doc/external/external_code.txt".to_string()
}

fn default_comment_header() -> String {
    "## Attention: External code changed".to_string()
}

fn default_label() -> String {
    "external-code-affected".to_string()
}

fn default_bot_login() -> String {
    "github-actions[bot]".to_string()
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
            comment_header: default_comment_header(),
            label: default_label(),
            bot_login: default_bot_login(),
            delimiter: default_delimiter(),
            api_base: default_api_base(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// An empty header would match every bot comment, and an empty delimiter
    /// cannot split the change set, so both are rejected along with the other
    /// required strings.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("registryPath", &self.registry_path),
            ("commentHeader", &self.comment_header),
            ("label", &self.label),
            ("botLogin", &self.bot_login),
            ("delimiter", &self.delimiter),
            ("apiBase", &self.api_base),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("Invalid config: '{}' must not be empty", name);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Looks for the config file in `start_dir` and its ancestors.
///
/// The search stops at the repository root (the first directory holding `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from; `None` when defaults are in use.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        });
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(ConfigLoadResult {
        config,
        source: Some(path),
    })
}
