//! The eight schools of magic and their single-letter codes

use std::fmt;

/// A school of magic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum School {
    Abjuration,
    Conjuration,
    Divination,
    Enchantment,
    Evocation,
    Illusion,
    Necromancy,
    Transmutation,
}

impl School {
    pub const ALL: [School; 8] = [
        School::Abjuration,
        School::Conjuration,
        School::Divination,
        School::Enchantment,
        School::Evocation,
        School::Illusion,
        School::Necromancy,
        School::Transmutation,
    ];

    /// Lowercase single-letter code as used in spell data (upper-cased there)
    pub fn code(self) -> &'static str {
        match self {
            School::Abjuration => "a",
            School::Conjuration => "c",
            School::Divination => "d",
            School::Enchantment => "e",
            // "e" is taken by enchantment
            School::Evocation => "v",
            School::Illusion => "i",
            School::Necromancy => "n",
            School::Transmutation => "t",
        }
    }

    /// Lowercase English name
    pub fn full_name(self) -> &'static str {
        match self {
            School::Abjuration => "abjuration",
            School::Conjuration => "conjuration",
            School::Divination => "divination",
            School::Enchantment => "enchantment",
            School::Evocation => "evocation",
            School::Illusion => "illusion",
            School::Necromancy => "necromancy",
            School::Transmutation => "transmutation",
        }
    }

    /// Look up a school by its full name, ignoring case
    pub fn from_full_name(name: &str) -> Option<School> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|s| s.full_name() == name)
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Normalize a user-supplied school for comparison against spell data
///
/// Lowercases the input and maps full names to their code. Anything that
/// is not a known full name passes through lowercased.
pub fn school_query_code(input: &str) -> String {
    match School::from_full_name(input) {
        Some(school) => school.code().to_string(),
        None => input.to_lowercase(),
    }
}
