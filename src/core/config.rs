//! Startup configuration with documented defaults
//!
//! The defaults live here instead of being scattered as constants. A TOML file
//! can override any of them, and command-line flags override the file.

use crate::core::error::{Result, SpellbookError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Base URL of the public 5etools spell data
pub const DEFAULT_BASE_URL: &str = "http://5e.tools/data/spells/";

/// Core rulebooks fetched when no books are requested
pub const CORE_BOOKS: [&str; 8] = ["PHB", "SCC", "FTD", "XGE", "TCE", "GGR", "EGW", "AI"];

/// Configuration for loading and filtering the session's spell set
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpellbookConfig {
    /// Remote directory serving `index.json` and the per-book files
    ///
    /// Relative paths from the index are appended to this URL, so it should
    /// end with a slash. `normalized_base_url` adds one when missing.
    pub base_url: String,

    /// Book identifiers to fetch, in fetch order
    ///
    /// Spells are concatenated in this order, which is also the order
    /// they appear in query output.
    pub books: Vec<String>,

    /// Class names whose spell lists are kept (exact, case-sensitive)
    pub classes: Vec<String>,

    /// Subclass names whose bonus spells are kept (exact, case-sensitive)
    ///
    /// Matches the subclass's own short name (e.g. "Grave"), never the
    /// parent class.
    pub subclasses: Vec<String>,
}

impl Default for SpellbookConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            books: CORE_BOOKS.iter().map(|b| b.to_string()).collect(),
            classes: vec!["Cleric".to_string()],
            subclasses: vec!["Grave".to_string()],
        }
    }
}

impl SpellbookConfig {
    /// Load a config from a TOML file; keys missing from the file keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SpellbookError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| SpellbookError::Config(format!("Failed to parse config TOML: {}", e)))
    }

    /// Base URL guaranteed to end with a slash
    pub fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".into());
        }

        if self.books.is_empty() {
            return Err("at least one book must be requested".into());
        }

        // With neither list the filter can never keep a spell
        if self.classes.is_empty() && self.subclasses.is_empty() {
            return Err("at least one class or subclass must be given".into());
        }

        Ok(())
    }
}
