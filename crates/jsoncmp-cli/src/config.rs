use std::path::{Path, PathBuf};

use anyhow::Context;
use jsoncmp_sdk::{DiffOptions, Filter};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "jsoncmp.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Object nesting limit; `0` disables it.
    pub max_depth: usize,
    pub color: bool,
    pub pane_width: usize,
    pub default_filter: String,
    pub report_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_depth: 512,
            color: true,
            pane_width: 60,
            default_filter: "all".into(),
            report_dir: PathBuf::from("."),
        }
    }
}

impl CliConfig {
    /// Load from `explicit`, or from [`DEFAULT_CONFIG_FILE`] in `cwd` if it
    /// exists, or fall back to defaults. An explicit path must exist.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config `{}`", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.filter()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn filter(&self) -> anyhow::Result<Filter> {
        self.default_filter
            .parse()
            .with_context(|| format!("invalid default_filter `{}`", self.default_filter))
    }

    pub fn diff_options(&self) -> DiffOptions {
        match self.max_depth {
            0 => DiffOptions::unbounded(),
            limit => DiffOptions {
                max_depth: Some(limit),
            },
        }
    }
}
