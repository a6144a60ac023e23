//! Tests for view composition.

mod common;

use common::{columns, page, ready, User};
use listing::view::{Body, SELECT_ALL_LABEL};
use listing::{
    Align, Column, DataTable, Decoration, GridView, QuerySnapshot, RenderState, SortIndicator,
    TableConfig, Tone,
};

fn table(selectable: bool) -> DataTable<User> {
    DataTable::new(columns(), TableConfig::default().selectable(selectable)).unwrap()
}

// ============================================================================
// Render states
// ============================================================================

#[test]
fn test_loading_skeleton_counts_selection_column() {
    let view = table(true).view(&QuerySnapshot::loading());
    let GridView::Loading(skeleton) = &view else {
        panic!("expected skeleton, got {:?}", view);
    };
    assert_eq!(skeleton.columns, 5);
    assert_eq!(skeleton.rows, 16);

    let GridView::Loading(skeleton) = table(false).view(&QuerySnapshot::loading()) else {
        panic!("expected skeleton");
    };
    assert_eq!(skeleton.columns, 4);
}

#[test]
fn test_loading_ignores_stale_data() {
    let mut snapshot = ready(1, 10, 187);
    snapshot.is_loading = true;
    let view = table(false).view(&snapshot);
    assert_eq!(view.render_state(), RenderState::Loading);
    assert!(view.as_grid().is_none());
}

#[test]
fn test_loading_wins_over_error() {
    let mut snapshot: QuerySnapshot<User> = QuerySnapshot::failed();
    snapshot.is_loading = true;
    assert_eq!(snapshot.render_state(), RenderState::Loading);
}

#[test]
fn test_error_discards_data_and_decoration() {
    let config = TableConfig::default()
        .error_message("Could not load users.")
        .header(Decoration::new("Premium Users"));
    let table = DataTable::new(columns(), config).unwrap();

    let mut snapshot = ready(1, 10, 187);
    snapshot.is_error = true;
    match table.view(&snapshot) {
        GridView::Error(message) => assert_eq!(message.message, "Could not load users."),
        other => panic!("expected error view, got {:?}", other),
    }
}

#[test]
fn test_empty_state_spans_all_columns() {
    let view = table(true).view(&QuerySnapshot::ready(Vec::new(), 0));
    assert_eq!(view.render_state(), RenderState::Empty);

    let grid = view.as_grid().unwrap();
    assert_eq!(
        grid.body,
        Body::Empty {
            message: "No data available.".to_string(),
            span: 5,
        }
    );
    assert!(grid.rows().is_empty());
    assert_eq!(grid.footer.pager.label(), "1 / 1");
}

#[test]
fn test_empty_page_select_all_unchecked() {
    let view = table(true).view(&QuerySnapshot::ready(Vec::new(), 0));
    let grid = view.as_grid().unwrap();
    let select_all = grid.select_all.as_ref().unwrap();
    assert!(!select_all.checked);
    assert_eq!(select_all.label, SELECT_ALL_LABEL);
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_sort_indicators() {
    let mut table = table(false);
    table.toggle_sort("age");
    table.toggle_sort("age");

    let view = table.view(&ready(1, 10, 187));
    let grid = view.as_grid().unwrap();
    let sorts: Vec<_> = grid.columns.iter().map(|c| c.sort).collect();
    assert_eq!(
        sorts,
        vec![
            Some(SortIndicator::Unsorted),
            None,
            Some(SortIndicator::Unsorted),
            Some(SortIndicator::Descending),
        ]
    );
}

#[test]
fn test_header_carries_alignment_and_width() {
    let columns = vec![
        Column::<User>::new("name", "Name").width(24),
        Column::new("age", "Age").align(Align::Right),
    ];
    let table = DataTable::new(columns, TableConfig::default()).unwrap();
    let view = table.view(&ready(1, 3, 3));
    let grid = view.as_grid().unwrap();
    assert_eq!(grid.columns[0].width, Some(24));
    assert_eq!(grid.columns[1].align, Align::Right);
    assert!(grid.select_all.is_none());
    assert_eq!(grid.column_count(), 2);
}

// ============================================================================
// Body
// ============================================================================

#[test]
fn test_body_cells_text_and_tone() {
    let view = table(false).view(&ready(1, 3, 3));
    let rows = view.as_grid().unwrap().rows().to_vec();
    assert_eq!(rows.len(), 3);

    let first = &rows[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.cells[0].text, "User 1");
    assert_eq!(first.cells[1].text, "user1@example.com");
    assert_eq!(first.cells[2].text, "Active");
    assert_eq!(first.cells[2].tone, Tone::Positive);
    assert_eq!(first.cells[3].text, "21");
    assert_eq!(first.cells[0].tone, Tone::Plain);

    assert_eq!(rows[1].cells[2].tone, Tone::Negative);
    assert_eq!(rows[2].cells[2].tone, Tone::Caution);
}

#[test]
fn test_rows_striped_on_odd_index() {
    let view = table(false).view(&ready(1, 4, 4));
    let striped: Vec<bool> = view.as_grid().unwrap().rows().iter().map(|r| r.striped).collect();
    assert_eq!(striped, vec![false, true, false, true]);
}

#[test]
fn test_computed_column() {
    let columns = vec![
        Column::new("name", "Name"),
        Column::computed("decade", "Decade", |u: &User| {
            i64::from(u.age / 10 * 10).into()
        }),
    ];
    let table = DataTable::new(columns, TableConfig::default()).unwrap();
    let view = table.view(&QuerySnapshot::ready(page(5, 1), 1));
    assert_eq!(view.as_grid().unwrap().rows()[0].cells[1].text, "20");
}

#[test]
fn test_row_checkboxes_follow_selection() {
    let mut table = table(true);
    table.toggle_row("2");

    let view = table.view(&ready(1, 3, 3));
    let grid = view.as_grid().unwrap();
    let checked: Vec<bool> = grid
        .rows()
        .iter()
        .map(|r| r.checkbox.as_ref().unwrap().checked)
        .collect();
    assert_eq!(checked, vec![false, true, false]);
    assert!(grid.rows()[1].selected);
    assert_eq!(grid.rows()[0].checkbox.as_ref().unwrap().label, "Select row");
    assert!(!grid.select_all.as_ref().unwrap().checked);
    assert_eq!(grid.footer.selected, Some(1));
}

#[test]
fn test_select_all_checked_when_every_visible_row_selected() {
    let mut table = table(true);
    let snapshot = ready(1, 3, 3);
    table.toggle_all_visible(&snapshot);

    let view = table.view(&snapshot);
    assert!(view.as_grid().unwrap().select_all.as_ref().unwrap().checked);
}

// ============================================================================
// Footer
// ============================================================================

#[test]
fn test_footer_pager_and_page_size() {
    let mut table = table(false);
    let snapshot = ready(1, 10, 187);
    table.observe(&snapshot);
    table.set_page(19);

    let view = table.view(&snapshot);
    let footer = &view.as_grid().unwrap().footer;
    assert_eq!(footer.pager.page, 19);
    assert_eq!(footer.pager.total_pages, 19);
    assert!(footer.pager.has_prev);
    assert!(!footer.pager.has_next);
    assert_eq!(footer.pager.range, Some((181, 187)));
    assert_eq!(footer.page_size.current, 10);
    assert_eq!(footer.page_size.options.len(), 6);
    assert_eq!(footer.selected, None);
}

#[test]
fn test_decorations_pass_through() {
    let config = TableConfig::default()
        .header(
            Decoration::new("Premium Users")
                .subtitle("Manage your premium user accounts and permissions.")
                .badge("Premium"),
        )
        .footer(Decoration::new("Synced"));
    let table = DataTable::new(columns(), config).unwrap();

    let view = table.view(&ready(1, 2, 2));
    let grid = view.as_grid().unwrap();
    assert_eq!(grid.header.as_ref().unwrap().badge.as_deref(), Some("Premium"));
    assert_eq!(grid.decoration_footer.as_ref().unwrap().title, "Synced");

    let GridView::Loading(skeleton) = table.view(&QuerySnapshot::loading()) else {
        panic!("expected skeleton");
    };
    assert_eq!(skeleton.header.unwrap().title, "Premium Users");
}
