//! Tests for the table façade: events, query keys and cross-state behavior.

mod common;

use std::sync::{Arc, Mutex};

use common::{columns, ready, User};
use listing::{
    Column, ColumnsError, DataTable, QueryKey, QuerySnapshot, SortOrder, SortState, TableConfig,
    TableEvent,
};

fn table() -> DataTable<User> {
    DataTable::new(columns(), TableConfig::default().selectable(true)).unwrap()
}

fn recording(table: DataTable<User>) -> (DataTable<User>, Arc<Mutex<Vec<TableEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let table = table.on_event(move |e| sink.lock().unwrap().push(e.clone()));
    (table, events)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_empty_columns_rejected() {
    let err = DataTable::<User>::new(Vec::new(), TableConfig::default()).unwrap_err();
    assert_eq!(err, ColumnsError::Empty);
}

#[test]
fn test_duplicate_columns_rejected() {
    let columns = vec![Column::<User>::new("name", "Name"), Column::new("name", "Again")];
    let err = DataTable::new(columns, TableConfig::default()).unwrap_err();
    assert_eq!(err, ColumnsError::Duplicate("name".to_string()));
    assert_eq!(err.to_string(), "duplicate column id 'name'");
}

#[test]
fn test_reserved_column_only_when_selectable() {
    let columns = || vec![Column::<User>::new("select", "Pick")];
    assert!(DataTable::new(columns(), TableConfig::default()).is_ok());
    let err = DataTable::new(columns(), TableConfig::default().selectable(true)).unwrap_err();
    assert_eq!(err, ColumnsError::Reserved("select".to_string()));
}

#[test]
fn test_initial_sort_on_unsortable_column_dropped() {
    let config = TableConfig::default().sort(SortState::asc("email"));
    let table = DataTable::<User>::new(columns(), config).unwrap();
    assert_eq!(table.sort_state(), &SortState::unsorted());

    let config = TableConfig::default().sort(SortState::asc("name"));
    let table = DataTable::<User>::new(columns(), config).unwrap();
    assert_eq!(table.sort_state(), &SortState::asc("name"));
}

// ============================================================================
// Query key
// ============================================================================

#[test]
fn test_query_key_follows_state() {
    let mut table = table();
    table.observe(&ready(1, 10, 187));
    assert_eq!(
        table.query_key(),
        QueryKey {
            page: 1,
            page_size: 10,
            sort: SortState::unsorted(),
        }
    );

    table.set_page(3);
    table.toggle_sort("age");
    table.set_page_size(20);

    let key = table.query_key();
    assert_eq!(key.page, 3);
    assert_eq!(key.page_size, 20);
    assert_eq!(key.sort, SortState::asc("age"));
    assert_eq!(key.offset(), 40);
    assert_eq!(key.to_string(), "page=3 size=20 sort=age:asc");
}

#[test]
fn test_key_changes_after_every_key_event() {
    let mut table = table();
    table.observe(&ready(1, 10, 187));

    let before = table.query_key();
    table.next_page();
    assert_ne!(table.query_key(), before);

    let before = table.query_key();
    table.toggle_sort("name");
    assert_ne!(table.query_key(), before);

    let before = table.query_key();
    table.cycle_page_size(true);
    assert_ne!(table.query_key(), before);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_sort_by_age_twice_notifies_desc() {
    let (mut table, events) = recording(table());
    table.toggle_sort("age");
    let event = table.toggle_sort("age");

    let expected = TableEvent::SortChanged(SortState {
        column: Some("age".to_string()),
        order: SortOrder::Desc,
    });
    assert_eq!(event, Some(expected.clone()));
    assert_eq!(events.lock().unwrap().last(), Some(&expected));
}

#[test]
fn test_no_event_for_non_sortable_column() {
    let (mut table, events) = recording(table());
    assert_eq!(table.toggle_sort("email"), None);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn test_out_of_range_page_clamps_and_notifies() {
    let (mut table, events) = recording(table());
    table.observe(&ready(1, 10, 187));
    assert_eq!(table.set_page(25), Some(TableEvent::PageChanged(19)));
    assert_eq!(table.pagination().page(), 19);
    assert_eq!(table.set_page(25), None);
    assert_eq!(events.lock().unwrap().as_slice(), &[TableEvent::PageChanged(19)]);
}

#[test]
fn test_observe_coerces_page_size_to_total() {
    let (mut table, events) = recording(table());
    let events_out = table.observe(&ready(1, 7, 7));
    assert_eq!(events_out, vec![TableEvent::PageSizeChanged(7)]);
    assert_eq!(table.pagination().page_size(), 7);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_observe_ignores_unsettled_snapshots() {
    let mut table = table();
    table.observe(&ready(1, 10, 187));
    table.set_page(5);

    assert!(table.observe(&QuerySnapshot::loading()).is_empty());
    assert!(table.observe(&QuerySnapshot::failed()).is_empty());
    assert_eq!(table.pagination().total(), 187);
    assert_eq!(table.pagination().page(), 5);
}

#[test]
fn test_cycle_page_size_walks_options() {
    let mut table = table();
    table.observe(&ready(1, 10, 187));

    assert_eq!(table.cycle_page_size(true), vec![TableEvent::PageSizeChanged(20)]);
    assert_eq!(table.cycle_page_size(false), vec![TableEvent::PageSizeChanged(10)]);
    assert_eq!(table.cycle_page_size(false), vec![TableEvent::PageSizeChanged(5)]);
    assert!(table.cycle_page_size(false).is_empty());

    table.set_page_size(150);
    assert!(table.cycle_page_size(true).is_empty());
}

// ============================================================================
// Selection across pages and sorts
// ============================================================================

#[test]
fn test_selection_persists_across_page_change() {
    let mut table = table();
    table.observe(&ready(1, 10, 187));
    table.toggle_row("3");

    table.next_page();
    let page_two = table.view(&ready(11, 10, 187));
    assert!(page_two.as_grid().unwrap().rows().iter().all(|r| !r.selected));
    assert_eq!(page_two.as_grid().unwrap().footer.selected, Some(1));

    table.prev_page();
    let page_one = table.view(&ready(1, 10, 187));
    let row = &page_one.as_grid().unwrap().rows()[2];
    assert_eq!(row.id, "3");
    assert!(row.selected);
}

#[test]
fn test_selection_survives_sort() {
    let mut table = table();
    table.toggle_row("3");
    table.toggle_sort("name");
    assert!(table.selection().is_selected("3"));
}

#[test]
fn test_toggle_all_visible_twice() {
    let (mut table, events) = recording(table());
    let snapshot = ready(1, 10, 187);

    assert_eq!(
        table.toggle_all_visible(&snapshot),
        Some(TableEvent::SelectionChanged { selected: 10 })
    );
    assert_eq!(
        table.toggle_all_visible(&snapshot),
        Some(TableEvent::SelectionChanged { selected: 0 })
    );
    assert_eq!(events.lock().unwrap().len(), 2);
}

#[test]
fn test_toggle_all_visible_ignored_while_loading() {
    let mut table = table();
    let mut snapshot = ready(1, 10, 187);
    snapshot.is_loading = true;
    assert_eq!(table.toggle_all_visible(&snapshot), None);
    assert_eq!(table.selection().count(), 0);
}

#[test]
fn test_selection_ignored_when_not_selectable() {
    let mut table = DataTable::<User>::new(columns(), TableConfig::default()).unwrap();
    assert_eq!(table.toggle_row("1"), None);
    assert_eq!(table.toggle_all(&["1".to_string()]), None);
    assert_eq!(table.selection().count(), 0);
}

#[test]
fn test_clear_selection() {
    let mut table = table();
    assert_eq!(table.clear_selection(), None);
    table.toggle_row("1");
    table.toggle_row("2");
    assert_eq!(
        table.clear_selection(),
        Some(TableEvent::SelectionChanged { selected: 0 })
    );
}
