//! Query engine over the session's spell set
//!
//! A query is up to four predicates evaluated in a fixed order (name, level,
//! school, cast time) against a shrinking candidate pool:
//!
//! - `or`: each predicate only searches spells no earlier predicate matched;
//!   its matches are appended to the result and leave the pool.
//! - `and`: each predicate's matches become both the result and the pool.
//!
//! When a sort key is given the *pool* is sorted and returned in place of the
//! result. For `and` the two are the same spells; for `or` the pool holds the
//! spells that matched nothing.

pub mod predicate;

pub use predicate::Predicate;

use crate::spell::Spell;
use crate::spell_list::PersonalSpellList;
use clap::ValueEnum;
use std::cmp::Ordering;

/// How the results of successive predicates combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CombineMode {
    And,
    Or,
}

/// Field to sort query output by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Level,
    School,
}

impl SortKey {
    pub fn compare(self, a: &Spell, b: &Spell) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Level => a.level.cmp(&b.level),
            SortKey::School => a.school.cmp(&b.school),
        }
    }
}

/// One query invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub mode: CombineMode,
    /// Name tokens; joined with spaces before matching
    pub name: Vec<String>,
    pub level: Option<u8>,
    pub school: Option<String>,
    pub cast_time: Option<String>,
    pub sort: Option<SortKey>,
    /// Search the personal spell list instead of the full set
    pub from_spells: bool,
}

impl QueryRequest {
    pub fn new(mode: CombineMode) -> Self {
        Self {
            mode,
            name: Vec::new(),
            level: None,
            school: None,
            cast_time: None,
            sort: None,
            from_spells: false,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.split_whitespace().map(String::from).collect();
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn with_cast_time(mut self, unit: impl Into<String>) -> Self {
        self.cast_time = Some(unit.into());
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn from_my_spells(mut self) -> Self {
        self.from_spells = true;
        self
    }

    /// Active predicates in evaluation order; empty arguments are skipped
    ///
    /// Level 0 counts as empty, so `-lv 0` does not select cantrips.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(4);
        if !self.name.is_empty() {
            predicates.push(Predicate::by_name(self.name.as_slice()));
        }
        if let Some(level) = self.level.filter(|l| *l != 0) {
            predicates.push(Predicate::by_level(level));
        }
        if let Some(school) = self.school.as_deref().filter(|s| !s.is_empty()) {
            predicates.push(Predicate::by_school(school));
        }
        if let Some(unit) = self.cast_time.as_deref().filter(|u| !u.is_empty()) {
            predicates.push(Predicate::by_cast_time(unit));
        }
        predicates
    }
}

/// Evaluate a request against a candidate pool
pub fn evaluate<'a>(mut pool: Vec<&'a Spell>, request: &QueryRequest) -> Vec<&'a Spell> {
    let mut result: Vec<&Spell> = Vec::new();

    for predicate in request.predicates() {
        tracing::info!("arg:{}", predicate);

        let (matched, rest): (Vec<&Spell>, Vec<&Spell>) =
            pool.into_iter().partition(|spell| predicate.matches(spell));

        for spell in &matched {
            tracing::info!("Added spell '{}'", spell.name);
        }

        match request.mode {
            CombineMode::Or => {
                result.extend(matched);
                pool = rest;
            }
            CombineMode::And => {
                result = matched.clone();
                pool = matched;
            }
        }
    }

    match request.sort {
        Some(key) => {
            pool.sort_by(|a, b| key.compare(a, b));
            pool
        }
        None => result,
    }
}

/// Run a query against the session's spells or the personal list
pub fn run_query<'a>(
    spells: &'a [Spell],
    request: &QueryRequest,
    my_spells: &PersonalSpellList,
) -> Vec<&'a Spell> {
    let pool = if request.from_spells {
        my_spells.resolve(spells)
    } else {
        spells.iter().collect()
    };
    evaluate(pool, request)
}
