//! Tests for the bound-name comparator

use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use super::*;

fn names(bindings: &[Binding]) -> Vec<&str> {
    bindings.iter().map(|b| b.imported.as_str()).collect()
}

fn plain(items: &[&str]) -> Vec<Binding> {
    items.iter().map(|name| Binding::plain(*name)).collect()
}

#[test]
fn natural_sort_orders_numeric_runs_by_value() {
    let sorted = sort_bindings(&plain(&["item10", "item2", "item1"]));
    assert_eq!(names(&sorted), vec!["item1", "item2", "item10"]);
}

#[test]
fn uppercase_wins_on_first_letter_collision() {
    let sorted = sort_bindings(&plain(&["customType", "CustomTypeValues"]));
    assert_eq!(names(&sorted), vec!["CustomTypeValues", "customType"]);
}

#[test]
fn differing_first_letters_compare_case_insensitively() {
    // `B` does not jump ahead of `a` just for being uppercase.
    let sorted = sort_bindings(&plain(&["Beta", "alpha"]));
    assert_eq!(names(&sorted), vec!["alpha", "Beta"]);
}

#[test]
fn case_breaks_ties_after_the_folded_pass() {
    assert_eq!(compare_names("aB", "ab"), Ordering::Less);
    assert_eq!(compare_names("ab", "ab"), Ordering::Equal);
}

#[test]
fn zero_padding_keeps_ordering_total() {
    assert_eq!(compare_names("a1", "a01"), Ordering::Less);
    assert_eq!(compare_names("a01", "a1"), Ordering::Greater);
    assert_eq!(compare_names("a2", "a10"), Ordering::Less);
}

#[test]
fn prefixes_sort_before_extensions() {
    assert_eq!(compare_names("use", "useState"), Ordering::Less);
    assert_eq!(compare_sources("./a", "./a/b"), Ordering::Less);
}

#[test]
fn sort_is_stable_for_equal_names() {
    let bindings = vec![
        Binding::aliased("dup", "first"),
        Binding::plain("aaa"),
        Binding::aliased("dup", "second"),
    ];
    let sorted = sort_bindings(&bindings);
    assert_eq!(
        sorted,
        vec![
            Binding::plain("aaa"),
            Binding::aliased("dup", "first"),
            Binding::aliased("dup", "second"),
        ]
    );
}

#[test]
fn sorted_check_agrees_with_the_sort() {
    let unsorted = plain(&["zeta", "alpha"]);
    assert!(!bindings_sorted(&unsorted));
    assert!(bindings_sorted(&sort_bindings(&unsorted)));
    assert!(bindings_sorted(&[]));

    // Aliases and type markers are invisible to the ordering.
    let mixed = vec![Binding::type_marked("alpha"), Binding::aliased("beta", "b")];
    assert!(bindings_sorted(&mixed));
}

#[test]
fn compare_sources_is_case_sensitive() {
    assert_eq!(compare_sources("Zebra", "apple"), Ordering::Less);
    assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
}
