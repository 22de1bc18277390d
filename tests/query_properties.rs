//! Property tests for how query predicates combine

use proptest::prelude::*;
use spellbook::query::{evaluate, CombineMode, QueryRequest, SortKey};
use spellbook::spell::Spell;
use std::collections::HashSet;

const SCHOOLS: [&str; 8] = ["A", "C", "D", "E", "V", "I", "N", "T"];

fn arb_spells() -> impl Strategy<Value = Vec<Spell>> {
    prop::collection::vec((0u8..10, 0usize..SCHOOLS.len()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (level, school))| {
                Spell::new(format!("Spell {:02}", i), level, SCHOOLS[school])
                    .with_cast_unit(if i % 3 == 0 { "bonus" } else { "action" })
            })
            .collect()
    })
}

fn names(spells: &[&Spell]) -> Vec<String> {
    spells.iter().map(|s| s.name.clone()).collect()
}

fn run(spells: &[Spell], request: &QueryRequest) -> Vec<String> {
    names(&evaluate(spells.iter().collect(), request))
}

proptest! {
    #[test]
    fn and_is_intersection(spells in arb_spells(), level in 1u8..10) {
        let by_level: HashSet<String> =
            run(&spells, &QueryRequest::new(CombineMode::And).with_level(level)).into_iter().collect();
        let by_school: HashSet<String> =
            run(&spells, &QueryRequest::new(CombineMode::And).with_school("evocation")).into_iter().collect();

        let combined = run(
            &spells,
            &QueryRequest::new(CombineMode::And).with_level(level).with_school("evocation"),
        );
        let combined_set: HashSet<String> = combined.iter().cloned().collect();

        prop_assert_eq!(combined.len(), combined_set.len());
        prop_assert_eq!(combined_set, &by_level & &by_school);
    }

    #[test]
    fn or_is_union_without_duplicates(spells in arb_spells(), level in 1u8..10) {
        let by_level: HashSet<String> =
            run(&spells, &QueryRequest::new(CombineMode::Or).with_level(level)).into_iter().collect();
        let by_school: HashSet<String> =
            run(&spells, &QueryRequest::new(CombineMode::Or).with_school("evocation")).into_iter().collect();

        let combined = run(
            &spells,
            &QueryRequest::new(CombineMode::Or).with_level(level).with_school("evocation"),
        );
        let combined_set: HashSet<String> = combined.iter().cloned().collect();

        prop_assert_eq!(combined.len(), combined_set.len());
        prop_assert_eq!(combined_set, &by_level | &by_school);
    }

    #[test]
    fn or_with_sort_returns_sorted_leftovers(spells in arb_spells(), level in 1u8..10) {
        let request = QueryRequest::new(CombineMode::Or)
            .with_level(level)
            .with_school("evocation")
            .sorted_by(SortKey::Name);
        let result = run(&spells, &request);

        let mut expected: Vec<String> = spells
            .iter()
            .filter(|s| s.level != level && s.school != "V")
            .map(|s| s.name.clone())
            .collect();
        expected.sort();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn level_zero_leaves_query_unchanged(spells in arb_spells()) {
        let with_zero = QueryRequest::new(CombineMode::Or)
            .with_level(0)
            .with_school("evocation")
            .sorted_by(SortKey::Name);
        let without = QueryRequest::new(CombineMode::Or)
            .with_school("evocation")
            .sorted_by(SortKey::Name);
        prop_assert_eq!(run(&spells, &with_zero), run(&spells, &without));
    }

    #[test]
    fn school_name_equals_school_code(spells in arb_spells()) {
        let by_name = run(&spells, &QueryRequest::new(CombineMode::And).with_school("Evocation"));
        let by_code = run(&spells, &QueryRequest::new(CombineMode::And).with_school("v"));
        prop_assert_eq!(by_name, by_code);
    }

    #[test]
    fn and_results_keep_input_order(spells in arb_spells()) {
        let result = run(&spells, &QueryRequest::new(CombineMode::And).with_cast_time("action"));
        let mut sorted = result.clone();
        sorted.sort();
        // Names are zero-padded by position, so input order is name order
        prop_assert_eq!(result, sorted);
    }
}
