//! Single-field spell predicates

use crate::spell::{school_query_code, Spell};
use std::fmt;

/// One filter of a query, pre-normalized for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Lowercased substring of the spell name
    ByName(String),
    ByLevel(u8),
    /// Lowercased school letter code (or an unrecognized name as given)
    BySchool(String),
    /// Lowercased casting-time unit
    ByCastTime(String),
}

impl Predicate {
    /// Name predicate from one or more tokens, joined with single spaces
    pub fn by_name<S: AsRef<str>>(tokens: &[S]) -> Self {
        let joined = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Predicate::ByName(joined.to_lowercase())
    }

    pub fn by_level(level: u8) -> Self {
        Predicate::ByLevel(level)
    }

    /// School predicate from a letter code or a full school name
    pub fn by_school(school: &str) -> Self {
        Predicate::BySchool(school_query_code(school))
    }

    pub fn by_cast_time(unit: &str) -> Self {
        Predicate::ByCastTime(unit.to_lowercase())
    }

    pub fn matches(&self, spell: &Spell) -> bool {
        match self {
            Predicate::ByName(needle) => spell.name.to_lowercase().contains(needle.as_str()),
            Predicate::ByLevel(level) => spell.level == *level,
            Predicate::BySchool(code) => spell.school.to_lowercase() == *code,
            Predicate::ByCastTime(unit) => spell
                .cast_units()
                .any(|u| u.to_lowercase() == *unit),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::ByName(name) => write!(f, "name={}", name),
            Predicate::ByLevel(level) => write!(f, "level={}", level),
            Predicate::BySchool(school) => write!(f, "school={}", school),
            Predicate::ByCastTime(unit) => write!(f, "cast-time={}", unit),
        }
    }
}
