//! Integration tests for the load -> filter -> query pipeline
//!
//! These drive the public API the way the binary does: parse a spell file,
//! apply the class filter, then feed scripted commands through a session.

use spellbook::filter::ClassFilter;
use spellbook::query::{run_query, CombineMode, QueryRequest};
use spellbook::session::{Session, PROMPT};
use spellbook::source::parse_spell_file;
use spellbook::spell::Spell;
use spellbook::spell_list::PersonalSpellList;

const MOCK_SPELLS: &str = r#"{"spell": [
    {"name":"Fireball","level":3,"school":"V","time":[{"unit":"action"}],"classes":{"fromClassList":[{"name":"Wizard"}]}},
    {"name":"Bless","level":1,"school":"A","time":[{"unit":"bonus"}],"classes":{"fromClassList":[{"name":"Cleric"}]}}
]}"#;

fn cleric_spells() -> Vec<Spell> {
    let spells = parse_spell_file(MOCK_SPELLS).unwrap();
    ClassFilter::new(["Cleric"], Vec::<String>::new()).apply(spells)
}

fn run_script(spells: &[Spell], script: &str) -> String {
    let mut output = Vec::new();
    Session::new(spells)
        .run(script.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_cleric_filter_keeps_only_bless() {
    let spells = cleric_spells();
    assert_eq!(spells.len(), 1);
    assert_eq!(spells[0].name, "Bless");
}

#[test]
fn test_level_query_returns_bless() {
    let spells = cleric_spells();
    let request = QueryRequest::new(CombineMode::And).with_level(1);
    let result = run_query(&spells, &request, &PersonalSpellList::new());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Bless");
}

#[test]
fn test_session_prints_indented_json() {
    let spells = cleric_spells();
    let out = run_script(&spells, "query -type and -lv 1\nquit\n");

    let json = out
        .strip_prefix(PROMPT)
        .and_then(|rest| rest.strip_suffix(PROMPT))
        .expect("output framed by prompts");
    let printed: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();
    let expected = serde_json::json!([
        {"name":"Bless","level":1,"school":"A","time":[{"unit":"bonus"}],"classes":{"fromClassList":[{"name":"Cleric"}]}}
    ]);
    assert_eq!(printed, expected);

    // Two-space indentation
    assert!(json.starts_with("[\n  {\n    \"name\": \"Bless\""));
}

#[test]
fn test_session_survives_bad_commands() {
    let spells = cleric_spells();
    let out = run_script(
        &spells,
        "query -type maybe\nfly away\nspell -add Bless\nquery -type or -n bl\nquit\n",
    );
    assert_eq!(out.matches("Could not parse command").count(), 2);
    assert!(out.contains("\"name\": \"Bless\""));
}

#[test]
fn test_session_school_name_and_cast_time() {
    let spells = parse_spell_file(MOCK_SPELLS).unwrap();
    let out = run_script(
        &spells,
        "query -type and --school Evocation --cast-time ACTION\nquit\n",
    );
    assert!(out.contains("\"name\": \"Fireball\""));
    assert!(!out.contains("\"name\": \"Bless\""));
}

#[test]
fn test_my_spells_query_is_empty_until_list_management_exists() {
    let spells = cleric_spells();
    let out = run_script(
        &spells,
        "spell -add Bless\nquery -type and -lv 1 --my-spells\nquit\n",
    );
    assert!(!out.contains("Bless"));
    assert_eq!(out.matches(PROMPT).count(), 3);
}
