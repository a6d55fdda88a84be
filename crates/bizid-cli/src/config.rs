//! # CLI Configuration
//!
//! Settings come from four layers, highest precedence first:
//!
//! 1. Command-line flags (`--format`, `--no-color`).
//! 2. Environment (`BIZID_FORMAT` through clap, `NO_COLOR` when non-empty).
//! 3. The YAML file given with `--config`.
//! 4. Built-in defaults: text output, color on.
//!
//! ## File format
//!
//! ```yaml
//! format: json        # text | json
//! color: false
//! self_test:          # appended to the built-in table
//!   - input: "0737546-2"
//!     expect_valid: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::selftest::SelfTestCase;

/// Output rendering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally colorized.
    #[default]
    Text,
    /// One JSON document per result.
    Json,
}

/// Contents of the optional YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub self_test: Vec<SelfTestCase>,
}

impl ConfigFile {
    /// Parse a config file from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("parsing config YAML")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("in config file: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            extra_cases = config.self_test.len(),
            "loaded config file"
        );
        Ok(config)
    }
}

/// Effective settings after layering flags, environment and file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: bool,
    pub extra_cases: Vec<SelfTestCase>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            extra_cases: Vec::new(),
        }
    }
}

impl Settings {
    /// Layer the sources. `format_flag` already includes `BIZID_FORMAT`.
    pub fn resolve(
        format_flag: Option<OutputFormat>,
        no_color_flag: bool,
        no_color_env: bool,
        file: Option<ConfigFile>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let format = format_flag.or(file.format).unwrap_or_default();
        let color = if no_color_flag || no_color_env {
            false
        } else {
            file.color.unwrap_or(true)
        };
        Self {
            format,
            color,
            extra_cases: file.self_test,
        }
    }
}

/// Whether `NO_COLOR` is set to a non-empty value.
pub fn no_color_from_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
