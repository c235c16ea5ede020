use hrconsole_lib::error::{DescriptorError, GridError};
use hrconsole_lib::{
    CellContent, CellValue, ColumnDescriptor, FilterDescriptor, Grid, GridOptions, GridRow,
    PageSelection, RowId, SortDirection, Tone,
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: i64,
    name: &'static str,
    dept: &'static str,
    age: Option<i64>,
}

impl GridRow for Person {
    fn row_id(&self) -> RowId {
        RowId::Int(self.id)
    }

    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.into(),
            "dept" => self.dept.into(),
            "age" => self.age.into(),
            _ => CellValue::Null,
        }
    }
}

fn person(id: i64, name: &'static str, dept: &'static str) -> Person {
    Person {
        id,
        name,
        dept,
        age: None,
    }
}

fn columns() -> Vec<ColumnDescriptor<Person>> {
    vec![
        ColumnDescriptor::new("id", "ID"),
        ColumnDescriptor::new("name", "Name").searchable(),
        ColumnDescriptor::new("dept", "Department").searchable(),
        ColumnDescriptor::new("age", "Age"),
        ColumnDescriptor::new("actions", "").unsortable().sticky(),
    ]
}

fn options() -> GridOptions {
    GridOptions::new()
        .filter(FilterDescriptor::new("dept", "Department").values(["HR", "Eng", "Ops"]))
        .selectable(true)
}

fn names(grid: &Grid<Person>) -> Vec<&'static str> {
    grid.view().visible_rows.iter().map(|p| p.name).collect()
}

fn staff() -> Vec<Person> {
    vec![
        person(1, "Bob", "HR"),
        person(2, "Amy", "Eng"),
        person(3, "Cy", "HR"),
        person(4, "dana", "Ops"),
        person(5, "Eve", "Eng"),
        person(6, "Finn", "HR"),
        person(7, "Gus", "Ops"),
    ]
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_filter_then_sort_scenario() {
    let rows = vec![
        person(1, "Bob", "HR"),
        person(2, "Amy", "Eng"),
        person(3, "Cy", "HR"),
    ];
    let mut grid = Grid::with_rows(columns(), options(), rows).unwrap();

    grid.set_filter("dept", Some("HR")).unwrap();
    grid.set_sort("name").unwrap();

    let view = grid.view();
    let ids: Vec<i64> = view.visible_rows.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(view.total_filtered_count, 2);
}

#[test]
fn test_page_count_scenario() {
    let rows: Vec<Person> = (1..=5).map(|id| person(id, "x", "HR")).collect();
    let mut grid = Grid::with_rows(columns(), options().page_size(2), rows).unwrap();

    assert_eq!(grid.view().total_page_count, 3);
    grid.set_page_index(2);
    assert_eq!(grid.view().visible_rows.len(), 1);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_is_case_insensitive_over_searchable_columns() {
    let mut grid = Grid::with_rows(columns(), options().page_size(50), staff()).unwrap();

    grid.set_search_text("DAN");
    assert_eq!(names(&grid), vec!["dana"]);

    grid.set_search_text("eng");
    assert_eq!(names(&grid), vec!["Amy", "Eve"]);
}

#[test]
fn test_search_ignores_unsearchable_columns() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    // "id" is not searchable, so "7" matches nothing.
    grid.set_search_text("7");
    assert_eq!(grid.view().total_filtered_count, 0);
}

#[test]
fn test_search_soundness_and_completeness() {
    let mut grid = Grid::with_rows(columns(), options().page_size(50), staff()).unwrap();
    for needle in ["", "a", "h", "o", "zz", "E"] {
        grid.set_search_text(needle);
        let lower = needle.to_lowercase();
        let hit = |p: &Person| {
            p.name.to_lowercase().contains(&lower) || p.dept.to_lowercase().contains(&lower)
        };
        let shown: Vec<i64> = grid.filtered_rows().iter().map(|p| p.id).collect();
        for p in staff() {
            assert_eq!(shown.contains(&p.id), hit(&p), "needle {:?} row {}", needle, p.id);
        }
    }
}

#[test]
fn test_search_resets_page() {
    let mut grid = Grid::with_rows(columns(), options().page_size(2), staff()).unwrap();
    grid.set_page_index(2);
    assert_eq!(grid.state().page_index(), 2);
    grid.set_search_text("");
    assert_eq!(grid.state().page_index(), 0);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_filters_and_search_combine_with_and() {
    let mut grid = Grid::with_rows(columns(), options().page_size(50), staff()).unwrap();
    grid.set_filter("dept", Some("HR")).unwrap();
    grid.set_search_text("n");
    assert_eq!(names(&grid), vec!["Finn"]);

    grid.set_filter("dept", None).unwrap();
    assert_eq!(names(&grid), vec!["Amy", "dana", "Eve", "Finn"]);
}

#[test]
fn test_unknown_filter_fails_without_mutating() {
    let mut grid = Grid::with_rows(columns(), options().page_size(2), staff()).unwrap();
    grid.set_page_index(1);
    let before = grid.state().clone();

    assert_eq!(
        grid.set_filter("location", Some("Berlin")),
        Err(GridError::UnknownFilter {
            key: "location".into()
        })
    );
    assert!(matches!(
        grid.set_filter("dept", Some("Finance")),
        Err(GridError::UnknownFilterOption { .. })
    ));
    assert_eq!(grid.state(), &before);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_cycle_returns_to_start() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    let original = grid.state().sort().cloned();

    grid.set_sort("name").unwrap();
    assert_eq!(grid.state().sort_direction(), Some(SortDirection::Asc));
    grid.set_sort("name").unwrap();
    assert_eq!(grid.state().sort_direction(), Some(SortDirection::Desc));
    grid.set_sort("name").unwrap();
    assert_eq!(grid.state().sort().cloned(), original);

    grid.set_sort("name").unwrap();
    let asc = grid.state().sort().cloned();
    for _ in 0..3 {
        grid.set_sort("name").unwrap();
    }
    assert_eq!(grid.state().sort().cloned(), asc);
}

#[test]
fn test_sort_other_column_starts_ascending() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    grid.set_sort("name").unwrap();
    grid.set_sort("name").unwrap();
    grid.set_sort("dept").unwrap();
    assert_eq!(grid.state().sort_key(), Some("dept"));
    assert_eq!(grid.state().sort_direction(), Some(SortDirection::Asc));
}

#[test]
fn test_sort_text_case_insensitive() {
    let mut grid = Grid::with_rows(columns(), options().page_size(50), staff()).unwrap();
    grid.set_sort("name").unwrap();
    assert_eq!(
        names(&grid),
        vec!["Amy", "Bob", "Cy", "dana", "Eve", "Finn", "Gus"]
    );
}

#[test]
fn test_sort_numeric_with_nulls_last() {
    let mut rows = staff();
    rows[0].age = Some(41);
    rows[1].age = Some(9);
    rows[2].age = Some(100);
    let mut grid = Grid::with_rows(columns(), options().page_size(50), rows).unwrap();

    grid.set_sort("age").unwrap();
    let ids: Vec<i64> = grid.filtered_rows().iter().map(|p| p.id).collect();
    assert_eq!(&ids[..3], &[2, 1, 3]);

    grid.set_sort("age").unwrap();
    let ids: Vec<i64> = grid.filtered_rows().iter().map(|p| p.id).collect();
    assert_eq!(&ids[..3], &[3, 1, 2]);
    // Rows without an age stay at the end, in their original order.
    assert_eq!(&ids[3..], &[4, 5, 6, 7]);
}

#[test]
fn test_sort_empty_text_last() {
    let rows = vec![person(1, "Bob", "HR"), person(2, "", "HR"), person(3, "Amy", "HR")];
    let mut grid = Grid::with_rows(columns(), options(), rows).unwrap();

    grid.set_sort("name").unwrap();
    let ids: Vec<i64> = grid.view().visible_rows.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    grid.set_sort("name").unwrap();
    let ids: Vec<i64> = grid.view().visible_rows.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn test_unsortable_and_unknown_columns_rejected() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    assert_eq!(
        grid.set_sort("actions"),
        Err(GridError::NotSortable {
            key: "actions".into()
        })
    );
    assert_eq!(
        grid.set_sort("salary"),
        Err(GridError::UnknownColumn {
            key: "salary".into()
        })
    );
    assert!(grid.state().sort().is_none());
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_page_size_bounds() {
    for page_size in 1..=8 {
        let mut grid = Grid::with_rows(columns(), options().page_size(page_size), staff()).unwrap();
        grid.set_filter("dept", Some("HR")).unwrap();
        for page in 0..grid.view().total_page_count {
            grid.set_page_index(page);
            let view = grid.view();
            assert!(view.visible_rows.len() <= page_size);
            assert!(view.visible_rows.len() <= view.total_filtered_count);
        }
    }
}

#[test]
fn test_pagination_round_trip() {
    for page_size in 1..=8 {
        let mut grid = Grid::with_rows(columns(), options().page_size(page_size), staff()).unwrap();
        grid.set_sort("dept").unwrap();
        let expected: Vec<i64> = grid.filtered_rows().iter().map(|p| p.id).collect();

        let mut collected = Vec::new();
        for page in 0..grid.view().total_page_count {
            grid.set_page_index(page);
            collected.extend(grid.view().visible_rows.iter().map(|p| p.id));
        }
        assert_eq!(collected, expected, "page size {}", page_size);
    }
}

#[test]
fn test_page_index_clamped() {
    let mut grid = Grid::with_rows(columns(), options().page_size(3), staff()).unwrap();
    grid.set_page_index(99);
    assert_eq!(grid.state().page_index(), 2);
    grid.previous_page();
    assert_eq!(grid.state().page_index(), 1);
    grid.set_page_index(0);
    grid.previous_page();
    assert_eq!(grid.state().page_index(), 0);
}

#[test]
fn test_page_size_change_resets_page() {
    let mut grid = Grid::with_rows(columns(), options().page_size(2), staff()).unwrap();
    grid.next_page();
    grid.set_page_size(5).unwrap();
    assert_eq!(grid.state().page_index(), 0);
    assert_eq!(grid.view().total_page_count, 2);
    assert_eq!(grid.set_page_size(0), Err(GridError::InvalidPageSize));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_all_scoped_to_page_and_persists() {
    let mut grid = Grid::with_rows(columns(), options().page_size(3), staff()).unwrap();
    grid.toggle_select_all().unwrap();
    assert_eq!(grid.page_selection(), PageSelection::All);

    grid.set_page_index(1);
    assert_eq!(grid.page_selection(), PageSelection::None);
    assert_eq!(
        grid.state().selection().ids(),
        vec![RowId::Int(1), RowId::Int(2), RowId::Int(3)]
    );

    grid.set_page_index(0);
    assert_eq!(grid.page_selection(), PageSelection::All);
}

#[test]
fn test_select_all_toggles_off_when_page_fully_selected() {
    let mut grid = Grid::with_rows(columns(), options().page_size(3), staff()).unwrap();
    grid.toggle_row_selection(&RowId::Int(2)).unwrap();
    assert_eq!(grid.page_selection(), PageSelection::Partial);

    grid.toggle_select_all().unwrap();
    assert_eq!(grid.state().selection().len(), 3);
    grid.toggle_select_all().unwrap();
    assert!(grid.state().selection().is_empty());
}

#[test]
fn test_selection_survives_filtering() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    grid.toggle_row_selection(&RowId::Int(2)).unwrap();
    grid.set_filter("dept", Some("HR")).unwrap();
    assert!(grid.is_selected(&RowId::Int(2)));
    let selected: Vec<i64> = grid.selected_rows().iter().map(|p| p.id).collect();
    assert_eq!(selected, vec![2]);
}

#[test]
fn test_selection_errors() {
    let mut grid = Grid::with_rows(columns(), options(), staff()).unwrap();
    assert_eq!(
        grid.toggle_row_selection(&RowId::Int(42)),
        Err(GridError::UnknownRow(RowId::Int(42)))
    );

    let mut fixed = Grid::with_rows(columns(), GridOptions::new(), staff()).unwrap();
    assert_eq!(fixed.toggle_select_all(), Err(GridError::SelectionDisabled));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_duplicate_column_key_rejected() {
    let mut cols = columns();
    cols.push(ColumnDescriptor::new("name", "Full name"));
    let err = Grid::<Person>::new(cols, options()).unwrap_err();
    assert_eq!(
        err,
        GridError::Descriptor(DescriptorError::DuplicateColumn { key: "name".into() })
    );
}

#[test]
fn test_duplicate_filter_option_rejected() {
    let opts = GridOptions::new().filter(FilterDescriptor::new("dept", "Department").values(["HR", "HR"]));
    let err = Grid::<Person>::new(columns(), opts).unwrap_err();
    assert!(matches!(
        err,
        GridError::Descriptor(DescriptorError::DuplicateOption { .. })
    ));
}

#[test]
fn test_zero_page_size_rejected() {
    let err = Grid::<Person>::new(columns(), GridOptions::new().page_size(0)).unwrap_err();
    assert_eq!(err, GridError::Descriptor(DescriptorError::ZeroPageSize));
}

#[test]
fn test_page_size_added_to_choices() {
    let grid = Grid::<Person>::new(columns(), GridOptions::new().page_size(7)).unwrap();
    assert_eq!(grid.options().page_size_choices(), &[5, 7, 10, 25, 50]);
}

#[test]
fn test_render_fallback_and_custom() {
    let plain = ColumnDescriptor::<Person>::new("dept", "Department");
    let toned = ColumnDescriptor::<Person>::new("name", "Name")
        .render(|p| CellContent::toned(p.name.to_uppercase(), Tone::Accent));
    let row = person(1, "Bob", "HR");

    assert_eq!(plain.cell(&row), CellContent::plain("HR"));
    assert_eq!(toned.cell(&row), CellContent::toned("BOB", Tone::Accent));
}

#[test]
fn test_reset_restores_defaults() {
    let mut grid = Grid::with_rows(columns(), options().page_size(2), staff()).unwrap();
    grid.set_search_text("e");
    grid.set_sort("name").unwrap();
    grid.set_page_size(5).unwrap();
    grid.reset();
    assert_eq!(grid.state().search_text(), "");
    assert!(grid.state().sort().is_none());
    assert_eq!(grid.state().page_size(), 2);
}
