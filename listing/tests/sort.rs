//! Tests for the sort toggle cycle.

mod common;

use common::columns;
use listing::{Columns, SortController, SortIndicator, SortOrder, SortState};

fn controller() -> (Columns<common::User>, SortController) {
    (Columns::new(columns()).unwrap(), SortController::default())
}

#[test]
fn test_first_toggle_sorts_ascending() {
    let (cols, mut sort) = controller();
    assert_eq!(sort.toggle(&cols, "name"), Some(SortState::asc("name")));
}

#[test]
fn test_same_column_twice_returns_to_original_order() {
    let (cols, mut sort) = controller();
    sort.toggle(&cols, "age");
    assert_eq!(sort.toggle(&cols, "age"), Some(SortState::desc("age")));
    assert_eq!(sort.toggle(&cols, "age"), Some(SortState::asc("age")));
}

#[test]
fn test_new_column_resets_to_ascending() {
    let (cols, mut sort) = controller();
    sort.toggle(&cols, "age");
    sort.toggle(&cols, "age");
    assert_eq!(sort.state().order, SortOrder::Desc);

    assert_eq!(sort.toggle(&cols, "name"), Some(SortState::asc("name")));
    assert_eq!(sort.indicator("age"), SortIndicator::Unsorted);
}

#[test]
fn test_non_sortable_column_is_ignored() {
    let (cols, mut sort) = controller();
    sort.toggle(&cols, "name");
    assert_eq!(sort.toggle(&cols, "email"), None);
    assert_eq!(sort.toggle(&cols, "missing"), None);
    assert_eq!(sort.state(), &SortState::asc("name"));
}

#[test]
fn test_indicator_tracks_state() {
    let (cols, mut sort) = controller();
    assert_eq!(sort.indicator("status"), SortIndicator::Unsorted);
    sort.toggle(&cols, "status");
    assert_eq!(sort.indicator("status"), SortIndicator::Ascending);
    sort.toggle(&cols, "status");
    assert_eq!(sort.indicator("status"), SortIndicator::Descending);
}

#[test]
fn test_set_rejects_non_sortable_column() {
    let (cols, mut sort) = controller();
    assert!(!sort.set(&cols, SortState::asc("email")));
    assert_eq!(sort.state(), &SortState::unsorted());
    assert!(sort.set(&cols, SortState::desc("age")));
}

#[test]
fn test_clear() {
    let (cols, mut sort) = controller();
    assert_eq!(sort.clear(), None);
    sort.toggle(&cols, "name");
    assert_eq!(sort.clear(), Some(SortState::unsorted()));
}

#[test]
fn test_sort_state_display() {
    assert_eq!(SortState::desc("age").to_string(), "age:desc");
    assert_eq!(SortState::unsorted().to_string(), "unsorted");
}
