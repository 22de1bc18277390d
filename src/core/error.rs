use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellbookError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Book not found in index: {0}")]
    MissingBook(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SpellbookError {
    fn from(err: reqwest::Error) -> Self {
        SpellbookError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpellbookError>;
