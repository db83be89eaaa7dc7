//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "statements": { "prefix": "statement_", "extension": "txt" }
//! }
//! ```
//! Keys this crate does not manage are kept as-is when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_STATEMENT_PREFIX: &str = "statement_";
const DEFAULT_STATEMENT_EXTENSION: &str = "txt";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    statements: StatementSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatementSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
}

/// Tally configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prepended to the lower-cased owner name to form a statement target
    pub statement_prefix: String,
    /// Statement target extension, without the dot
    pub statement_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            statement_prefix: DEFAULT_STATEMENT_PREFIX.to_string(),
            statement_extension: DEFAULT_STATEMENT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or unreadable settings file yields the defaults. The
    /// statement prefix can be overridden with TALLY_STATEMENT_PREFIX.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;
        let defaults = Self::default();

        let statement_prefix = match std::env::var("TALLY_STATEMENT_PREFIX") {
            Ok(prefix) => prefix,
            Err(_) => raw.statements.prefix.unwrap_or(defaults.statement_prefix),
        };

        Ok(Self {
            statement_prefix,
            statement_extension: raw
                .statements
                .extension
                .unwrap_or(defaults.statement_extension),
        })
    }

    /// Save config to the data directory, keeping unmanaged settings
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let mut settings = read_settings(data_dir)?;

        settings.statements.prefix = Some(self.statement_prefix.clone());
        settings.statements.extension = Some(self.statement_extension.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(data_dir.join("settings.json"), content)?;
        Ok(())
    }

    /// Statement target for an owner, e.g. `statement_ana.txt`
    pub fn statement_target(&self, owner: &str) -> String {
        format!(
            "{}{}.{}",
            self.statement_prefix,
            owner.to_lowercase(),
            self.statement_extension
        )
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}
