//! Read and write `{"spell": [...]}` files

use crate::core::error::Result;
use crate::spell::Spell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk and on-the-wire layout of a spell collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellFile {
    pub spell: Vec<Spell>,
}

#[derive(Serialize)]
struct SpellFileRef<'a> {
    spell: &'a [Spell],
}

/// Parse a spell collection from JSON text
pub fn parse_spell_file(json: &str) -> Result<Vec<Spell>> {
    let file: SpellFile = serde_json::from_str(json)?;
    Ok(file.spell)
}

/// Load a spell collection from a JSON file on disk
pub fn load_from_file(path: &Path) -> Result<Vec<Spell>> {
    tracing::info!("Loading spells from file: {}...", path.display());
    let content = fs::read_to_string(path)?;
    let spells = parse_spell_file(&content)?;
    tracing::info!("Loaded {} spells from {}", spells.len(), path.display());
    Ok(spells)
}

/// Write a spell collection to disk, replacing any existing file
pub fn write_to_file(spells: &[Spell], path: &Path) -> Result<()> {
    tracing::info!("Writing spells to file: {}...", path.display());
    let json = serde_json::to_string(&SpellFileRef { spell: spells })?;
    fs::write(path, json)?;
    tracing::info!("Wrote {} spells to {}", spells.len(), path.display());
    Ok(())
}
