//! Blocking HTTP loader for the 5etools spell directory
//!
//! The directory serves an `index.json` mapping book identifiers to file
//! names, and one `{"spell": [...]}` file per book. Fetching goes through the
//! `Fetch` trait so the loader can be exercised without a network.

use crate::core::error::{Result, SpellbookError};
use crate::source::file::parse_spell_file;
use crate::spell::Spell;
use reqwest::blocking::Client;
use std::collections::HashMap;

/// Name of the index resource under the base URL
pub const INDEX_PATH: &str = "index.json";

/// Book identifier -> resource path relative to the base URL
pub type BookIndex = HashMap<String, String>;

/// Something that can fetch a resource relative to a base location
pub trait Fetch {
    /// Return the body of the resource at `path`
    fn fetch(&self, path: &str) -> Result<String>;

    /// Human-readable description of where resources come from
    fn origin(&self) -> &str;
}

/// Fetches resources over HTTP with a blocking client
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher rooted at `base_url` (should end with a slash)
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(SpellbookError::HttpStatus {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.text()?)
    }

    fn origin(&self) -> &str {
        &self.base_url
    }
}

/// Loads spells book by book from a remote spell directory
pub struct RemoteLoader<F: Fetch> {
    fetcher: F,
}

impl<F: Fetch> RemoteLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse the book index
    pub fn fetch_index(&self) -> Result<BookIndex> {
        let body = self.fetcher.fetch(INDEX_PATH)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Load the spells of every requested book, concatenated in request order
    ///
    /// Fails on the first book missing from the index; nothing partial is
    /// returned.
    pub fn load_books(&self, books: &[String]) -> Result<Vec<Spell>> {
        let index = self.fetch_index()?;
        tracing::info!("Loading spells from website: {}...", self.fetcher.origin());

        let mut spells = Vec::new();
        for book in books {
            let path = index
                .get(book)
                .ok_or_else(|| SpellbookError::MissingBook(book.clone()))?;

            tracing::info!("Loading from {}.", book);
            let body = self.fetcher.fetch(path)?;
            let book_spells = parse_spell_file(&body)?;
            tracing::debug!("{} contributed {} spells", book, book_spells.len());
            spells.extend(book_spells);
        }

        tracing::info!("Loaded {} spells from {} books", spells.len(), books.len());
        Ok(spells)
    }
}
