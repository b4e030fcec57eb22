//! Configuration file loading and parsing.
//!
//! `.lingotrc.json` is optional; every field has a default and CLI flags
//! override whatever the file provides.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for translation files to skip during enumeration.
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Directory containing one subdirectory per language code.
    #[serde(default = "default_translations_root", alias = "translationsDir")]
    pub translations_root: String,

    /// Output path template; `%lang` is replaced with the language code.
    #[serde(default = "default_output_template")]
    pub output_template: String,

    /// The language whose keys define the canonical set.
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Where to write the generated type declarations, if anywhere.
    #[serde(default)]
    pub declarations: Option<String>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_output_template() -> String {
    "./translations/%lang/_generated.json".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            translations_root: default_translations_root(),
            output_template: default_output_template(),
            source_language: default_source_language(),
            declarations: None,
        }
    }
}

impl Config {
    /// Load the config from the working directory, falling back to defaults
    /// when no config file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// The compiled ignore patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

/// The default config serialized for `lingot init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!("{json}\n"))
}
