//! The player's personal spell list
//!
//! Only the storage exists so far. The `spell` command parses its arguments
//! but nothing adds to or removes from the list yet, so queries run with
//! `--my-spells` see an empty set.

use crate::spell::Spell;

/// Ordered spell names chosen by the player for this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalSpellList {
    names: Vec<String>,
}

impl PersonalSpellList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The listed spells, looked up by exact name in `spells`, in list order
    ///
    /// Names with no matching spell are skipped.
    pub fn resolve<'a>(&self, spells: &'a [Spell]) -> Vec<&'a Spell> {
        self.names
            .iter()
            .filter_map(|name| spells.iter().find(|s| &s.name == name))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PersonalSpellList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
