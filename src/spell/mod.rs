//! Spell records as published in 5etools data files
//!
//! Only the fields the tool filters on are modelled. Everything else in a
//! record is kept in the flattened `extra` maps so a loaded set can be
//! written back out unchanged.

pub mod school;

pub use school::{school_query_code, School};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single spell record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    /// 0 for cantrips, otherwise 1-9
    pub level: u8,
    /// Letter code (e.g. "V") or, in some homebrew data, a full name
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<CastTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<SpellClasses>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One casting-time entry, e.g. `{"number": 1, "unit": "action"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which classes and subclasses can learn a spell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellClasses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_class_list: Option<Vec<NamedRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_subclass: Option<Vec<SubclassGrant>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{name, source}` reference to a class or subclass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A subclass granting the spell, alongside its parent class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubclassGrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<NamedRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spell {
    /// Create a spell with only the modelled fields set
    pub fn new(name: impl Into<String>, level: u8, school: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            school: school.into(),
            time: None,
            classes: None,
            extra: Map::new(),
        }
    }

    /// Builder: add a casting-time entry with the given unit
    pub fn with_cast_unit(mut self, unit: impl Into<String>) -> Self {
        self.time.get_or_insert_with(Vec::new).push(CastTime {
            unit: Some(unit.into()),
            extra: Map::new(),
        });
        self
    }

    /// Builder: add a class to the class list
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let classes = self.classes.get_or_insert_with(SpellClasses::default);
        classes
            .from_class_list
            .get_or_insert_with(Vec::new)
            .push(NamedRef::named(class));
        self
    }

    /// Builder: add a subclass grant
    pub fn with_subclass(mut self, class: impl Into<String>, subclass: impl Into<String>) -> Self {
        let classes = self.classes.get_or_insert_with(SpellClasses::default);
        classes
            .from_subclass
            .get_or_insert_with(Vec::new)
            .push(SubclassGrant {
                class: Some(NamedRef::named(class)),
                subclass: Some(NamedRef::named(subclass)),
                extra: Map::new(),
            });
        self
    }

    /// Names from the class list; empty when the record has none
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .flat_map(|c| c.from_class_list.iter().flatten())
            .filter_map(|c| c.name.as_deref())
    }

    /// The subclass's own name for every subclass grant
    pub fn subclass_names(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .flat_map(|c| c.from_subclass.iter().flatten())
            .filter_map(|grant| grant.subclass.as_ref())
            .filter_map(|s| s.name.as_deref())
    }

    /// Units of every casting-time entry
    pub fn cast_units(&self) -> impl Iterator<Item = &str> {
        self.time.iter().flatten().filter_map(|t| t.unit.as_deref())
    }
}

impl NamedRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDING_BOLT: &str = r#"{
        "name": "Guiding Bolt",
        "source": "PHB",
        "page": 248,
        "level": 1,
        "school": "V",
        "time": [{"number": 1, "unit": "action"}],
        "range": {"type": "point", "distance": {"type": "feet", "amount": 120}},
        "classes": {
            "fromClassList": [{"name": "Cleric", "source": "PHB"}],
            "fromSubclass": [
                {"class": {"name": "Sorcerer", "source": "PHB"},
                 "subclass": {"name": "Divine Soul", "source": "XGE"}}
            ]
        }
    }"#;

    #[test]
    fn test_deserialize_5etools_record() {
        let spell: Spell = serde_json::from_str(GUIDING_BOLT).unwrap();
        assert_eq!(spell.name, "Guiding Bolt");
        assert_eq!(spell.level, 1);
        assert_eq!(spell.school, "V");
        assert_eq!(spell.cast_units().collect::<Vec<_>>(), vec!["action"]);
        assert_eq!(spell.class_names().collect::<Vec<_>>(), vec!["Cleric"]);
        assert_eq!(spell.subclass_names().collect::<Vec<_>>(), vec!["Divine Soul"]);
        assert_eq!(spell.extra["source"], "PHB");
        assert_eq!(spell.extra["page"], 248);
    }

    #[test]
    fn test_unmodelled_fields_survive_reserialization() {
        let original: Value = serde_json::from_str(GUIDING_BOLT).unwrap();
        let spell: Spell = serde_json::from_value(original.clone()).unwrap();
        let written = serde_json::to_value(&spell).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    fn test_missing_classes_yield_no_names() {
        let spell: Spell =
            serde_json::from_str(r#"{"name": "Wish", "level": 9, "school": "C"}"#).unwrap();
        assert!(spell.classes.is_none());
        assert_eq!(spell.class_names().count(), 0);
        assert_eq!(spell.subclass_names().count(), 0);
        assert_eq!(spell.cast_units().count(), 0);

        let written = serde_json::to_value(&spell).unwrap();
        assert!(written.get("classes").is_none());
        assert!(written.get("time").is_none());
    }

    #[test]
    fn test_absent_fields_are_not_invented() {
        let source = r#"{
            "name": "Wish",
            "level": 9,
            "school": "C",
            "classes": {"fromSubclass": [{"subclass": {"source": "X"}}]}
        }"#;
        let original: Value = serde_json::from_str(source).unwrap();
        let spell: Spell = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(spell.subclass_names().count(), 0);
        assert_eq!(serde_json::to_value(&spell).unwrap(), original);
    }

    #[test]
    fn test_builders() {
        let spell = Spell::new("Bless", 1, "A")
            .with_cast_unit("action")
            .with_class("Cleric")
            .with_class("Paladin")
            .with_subclass("Warlock", "Celestial");
        assert_eq!(spell.class_names().collect::<Vec<_>>(), vec!["Cleric", "Paladin"]);
        assert_eq!(spell.subclass_names().collect::<Vec<_>>(), vec!["Celestial"]);
    }
}
