//! Operator binding tests: `-` / `-=` against filter lists, `+` / `+=` for merges

use mapsieve_core::prelude::{FilterList, FilterSpec};
use mapsieve_operators::SieveMap;

fn entry_map(entries: &[(&str, i32)]) -> SieveMap<String, i32> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_documented_scenario_end_to_end() {
    let mut map = entry_map(&[("a", 1), ("b", 2)]);

    let drop_a: FilterList = vec![FilterSpec::symbol("a")];
    assert_eq!(&map - &drop_a, entry_map(&[("b", 2)]));
    assert_eq!(map, entry_map(&[("a", 1), ("b", 2)]), "subtraction must not mutate");

    let extra = entry_map(&[("c", 3)]);
    assert_eq!(&map + &extra, entry_map(&[("a", 1), ("b", 2), ("c", 3)]));
    assert_eq!(map, entry_map(&[("a", 1), ("b", 2)]), "merge must not mutate");

    map += &entry_map(&[("abc", 4)]);
    assert_eq!(map, entry_map(&[("a", 1), ("b", 2), ("abc", 4)]));

    let drop_pattern_a: FilterList = vec![FilterSpec::pattern("a").expect("pattern")];
    assert_eq!(&map - &drop_pattern_a, entry_map(&[("b", 2)]));
    assert_eq!(map, entry_map(&[("a", 1), ("b", 2), ("abc", 4)]));

    map -= vec![FilterSpec::text("b")];
    assert_eq!(map, entry_map(&[("a", 1), ("abc", 4)]));
}

#[test]
fn test_sub_accepts_slice_operand() {
    let map = entry_map(&[("a", 1), ("b", 2)]);
    let specs = vec![FilterSpec::text("a")];

    assert_eq!(&map - specs.as_slice(), entry_map(&[("b", 2)]));
}

#[test]
fn test_sub_accepts_owned_list_operand() {
    let map = entry_map(&[("a", 1), ("b", 2)]);

    let residual = &map - vec![FilterSpec::text("b")];

    assert_eq!(residual, entry_map(&[("a", 1)]));
}

#[test]
fn test_sub_assign_with_borrowed_list() {
    let mut map = entry_map(&[("a", 1), ("b", 2), ("c", 3)]);
    let specs: FilterList = vec![FilterSpec::text("a"), FilterSpec::text("c")];

    map -= &specs;

    assert_eq!(map, entry_map(&[("b", 2)]));
}

#[test]
fn test_sub_matches_named_subtract() {
    let map = entry_map(&[("a", 1), ("abc", 4), ("b", 2)]);
    let specs = vec![FilterSpec::pattern("b").expect("pattern")];

    assert_eq!(&map - &specs, map.subtract(&specs));
}

#[test]
fn test_add_right_side_wins_on_conflict() {
    let left = entry_map(&[("a", 1), ("b", 2)]);
    let right = entry_map(&[("b", 9), ("c", 3)]);

    let merged = &left + &right;

    assert_eq!(merged, entry_map(&[("a", 1), ("b", 9), ("c", 3)]));
}

#[test]
fn test_add_owned_moves_entries() {
    let left = entry_map(&[("a", 1)]);
    let right = entry_map(&[("a", 7), ("b", 2)]);

    let merged = left + right;

    assert_eq!(merged, entry_map(&[("a", 7), ("b", 2)]));
}

#[test]
fn test_add_assign_right_side_wins() {
    let mut map = entry_map(&[("a", 1), ("b", 2)]);

    map += &entry_map(&[("b", 9)]);
    assert_eq!(map, entry_map(&[("a", 1), ("b", 9)]));

    map += entry_map(&[("c", 3)]);
    assert_eq!(map, entry_map(&[("a", 1), ("b", 9), ("c", 3)]));
}

#[test]
fn test_union_named_functions_match_operators() {
    let left = entry_map(&[("a", 1), ("b", 2)]);
    let right = entry_map(&[("b", 9), ("c", 3)]);

    assert_eq!(left.union(&right), &left + &right);

    let mut via_named = left.clone();
    via_named.union_in_place(&right);
    let mut via_op = left.clone();
    via_op += &right;
    assert_eq!(via_named, via_op);
}

#[test]
fn test_operator_chain_over_intermediate_results() {
    let map = entry_map(&[("alpha", 1), ("beta", 2), ("gamma", 3)]);
    let specs: FilterList = vec![FilterSpec::pattern("^a").expect("pattern")];

    let residual = &(&map - &specs) + &entry_map(&[("delta", 4)]);

    assert_eq!(
        residual,
        entry_map(&[("beta", 2), ("gamma", 3), ("delta", 4)])
    );
}
