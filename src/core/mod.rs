pub mod config;
pub mod error;

pub use config::SpellbookConfig;
pub use error::{Result, SpellbookError};
