//! Where the session's spells come from, and where they go afterwards
//!
//! Spells are read either from a local `{"spell": [...]}` file or from a
//! remote 5etools-style directory, one book at a time.

pub mod file;
pub mod remote;

pub use file::{load_from_file, parse_spell_file, write_to_file, SpellFile};
pub use remote::{BookIndex, Fetch, HttpFetcher, RemoteLoader};

use crate::core::error::Result;
use crate::core::SpellbookConfig;
use crate::spell::Spell;
use std::path::PathBuf;

/// A resolved origin for the initial spell set
#[derive(Debug, Clone, PartialEq)]
pub enum SpellSource {
    /// A previously written spell file
    File(PathBuf),
    /// A remote directory and the books to fetch from it
    Remote { base_url: String, books: Vec<String> },
}

impl SpellSource {
    /// Pick the source for a run: a local file when given, otherwise the remote directory
    pub fn from_config(config: &SpellbookConfig, from_file: Option<PathBuf>) -> Self {
        match from_file {
            Some(path) => SpellSource::File(path),
            None => SpellSource::Remote {
                base_url: config.normalized_base_url(),
                books: config.books.clone(),
            },
        }
    }

    /// Load every spell from this source
    pub fn load(&self) -> Result<Vec<Spell>> {
        match self {
            SpellSource::File(path) => load_from_file(path),
            SpellSource::Remote { base_url, books } => {
                RemoteLoader::new(HttpFetcher::new(base_url.clone())).load_books(books)
            }
        }
    }
}
