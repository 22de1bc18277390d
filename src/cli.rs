//! Startup flags and how they combine with the config file

use crate::core::config::SpellbookConfig;
use crate::core::error::{Result, SpellbookError};
use clap::Parser;
use std::path::PathBuf;

/// Retrieve D&D 5e spells and query them interactively
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "spellbook")]
#[command(about = "Retrieve D&D 5e spells and query them interactively")]
pub struct Cli {
    /// Books to fetch (default: the core rulebooks)
    #[arg(short = 'b', long = "books", num_args = 1.., value_name = "BOOK")]
    pub books: Option<Vec<String>>,

    /// Classes whose spell lists are kept (default: Cleric)
    #[arg(short = 'c', long = "classes", num_args = 1.., value_name = "CLASS")]
    pub classes: Option<Vec<String>>,

    /// Subclasses whose bonus spells are kept (default: Grave)
    #[arg(long = "subclasses", visible_alias = "sc", num_args = 1.., value_name = "SUBCLASS")]
    pub subclasses: Option<Vec<String>>,

    /// Load spells from this file instead of the website
    #[arg(long = "from", value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Write the filtered spells to this file on exit
    #[arg(long = "to", value_name = "PATH")]
    pub dest_file: Option<PathBuf>,

    /// TOML file overriding the built-in defaults
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the remote spell directory
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Log debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<SpellbookConfig> {
        let base = match &self.config {
            Some(path) => SpellbookConfig::from_file(path)?,
            None => SpellbookConfig::default(),
        };
        let config = self.apply_overrides(base);
        config.validate().map_err(SpellbookError::Config)?;
        Ok(config)
    }

    fn apply_overrides(&self, mut config: SpellbookConfig) -> SpellbookConfig {
        if let Some(books) = &self.books {
            config.books = books.clone();
        }
        if let Some(classes) = &self.classes {
            config.classes = classes.clone();
        }
        if let Some(subclasses) = &self.subclasses {
            config.subclasses = subclasses.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        config
    }
}
