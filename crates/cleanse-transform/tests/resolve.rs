//! Resolver contract: never invents columns, never fails the pipeline.

use cleanse_model::ColumnSelection;
use cleanse_transform::resolve_columns;
use proptest::prelude::*;

fn live(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn all_returns_live_columns_in_order() {
    let columns = live(&["b", "a", "c"]);
    let resolved = resolve_columns(&ColumnSelection::All, &columns);
    assert_eq!(resolved, columns);
}

#[test]
fn empty_list_resolves_to_empty() {
    let columns = live(&["a", "b"]);
    let resolved = resolve_columns(&ColumnSelection::Columns(vec![]), &columns);
    assert!(resolved.is_empty());
}

#[test]
fn unknown_names_are_dropped_not_fatal() {
    let columns = live(&["a", "b"]);
    let selection = ColumnSelection::Columns(live(&["a", "ghost", "b"]));
    let resolved = resolve_columns(&selection, &columns);
    assert_eq!(resolved, live(&["a", "b"]));
}

#[test]
fn requested_order_and_repeats_are_preserved() {
    let columns = live(&["a", "b", "c"]);
    let selection = ColumnSelection::Columns(live(&["c", "a", "c"]));
    let resolved = resolve_columns(&selection, &columns);
    assert_eq!(resolved, live(&["c", "a", "c"]));
}

proptest! {
    #[test]
    fn resolved_names_are_always_live(
        requested in proptest::collection::vec("[a-e]{1,2}", 0..8),
        columns in proptest::collection::vec("[a-e]{1,2}", 0..8),
    ) {
        let selection = ColumnSelection::Columns(requested);
        let resolved = resolve_columns(&selection, &columns);
        for name in &resolved {
            prop_assert!(columns.contains(name));
        }
    }
}
