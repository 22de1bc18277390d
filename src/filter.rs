//! Reduce a spell set to what a character's classes and subclasses can cast

use crate::spell::Spell;
use std::collections::HashSet;

/// Keeps spells on a wanted class list or granted by a wanted subclass
///
/// Matching is exact and case-sensitive. Subclasses match on their own name
/// ("Grave"), never on the parent class they belong to.
#[derive(Debug, Clone, Default)]
pub struct ClassFilter {
    classes: HashSet<String>,
    subclasses: HashSet<String>,
}

impl ClassFilter {
    pub fn new<C, S>(classes: C, subclasses: S) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            subclasses: subclasses.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any entry of the spell's class list is wanted
    pub fn wants_class(&self, spell: &Spell) -> bool {
        spell.class_names().any(|name| self.classes.contains(name))
    }

    /// Whether any subclass granting the spell is wanted
    pub fn wants_subclass(&self, spell: &Spell) -> bool {
        spell.subclass_names().any(|name| self.subclasses.contains(name))
    }

    pub fn keeps(&self, spell: &Spell) -> bool {
        self.wants_class(spell) || self.wants_subclass(spell)
    }

    /// Keep only wanted spells, preserving order
    pub fn apply(&self, spells: Vec<Spell>) -> Vec<Spell> {
        let total = spells.len();
        let kept: Vec<Spell> = spells.into_iter().filter(|s| self.keeps(s)).collect();
        tracing::info!(
            "Kept {} of {} spells for classes {:?} / subclasses {:?}",
            kept.len(),
            total,
            self.classes,
            self.subclasses
        );
        kept
    }
}
