//! User gestures and their mapping onto grid mutators.

use hrconsole_lib::error::GridError;
use hrconsole_lib::{Grid, GridRow};

use super::GridUi;

/// One user gesture on a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Replace the search text.
    Search(String),
    /// Select or clear a facet filter.
    SetFilter { key: String, value: Option<String> },
    /// Clear search and all filters.
    ClearFilters,
    /// Activate the focused header.
    SortFocused,
    /// Move header focus by `n` sortable columns.
    FocusColumn(isize),
    CursorUp,
    CursorDown,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Next larger page-size choice.
    PageSizeUp,
    /// Next smaller page-size choice.
    PageSizeDown,
    /// Toggle selection of the row under the cursor.
    ToggleRow,
    /// Toggle selection of the current page.
    ToggleAll,
    ClearSelection,
}

/// Apply a gesture: call the matching grid mutator, then keep the cursor
/// inside the new page.
pub fn apply<T: GridRow>(
    grid: &mut Grid<T>,
    ui: &mut GridUi,
    gesture: Gesture,
) -> Result<(), GridError> {
    let page_before = grid.state().page_index();
    match gesture {
        Gesture::Search(text) => grid.set_search_text(text),
        Gesture::SetFilter { key, value } => grid.set_filter(&key, value.as_deref())?,
        Gesture::ClearFilters => grid.clear_filters(),
        Gesture::SortFocused => {
            if let Some(key) = ui
                .focused_column
                .and_then(|i| grid.columns().get(i))
                .map(|c| c.key.clone())
            {
                grid.set_sort(&key)?;
            }
        }
        Gesture::FocusColumn(delta) => {
            ui.focused_column = step_sortable(grid, ui.focused_column, delta);
        }
        Gesture::CursorUp => ui.cursor = ui.cursor.saturating_sub(1),
        Gesture::CursorDown => ui.cursor = ui.cursor.saturating_add(1),
        Gesture::NextPage => grid.next_page(),
        Gesture::PreviousPage => grid.previous_page(),
        Gesture::FirstPage => grid.set_page_index(0),
        Gesture::LastPage => grid.set_page_index(usize::MAX),
        Gesture::PageSizeUp | Gesture::PageSizeDown => {
            let current = grid.state().page_size();
            let choices = grid.options().page_size_choices();
            let next = if gesture == Gesture::PageSizeUp {
                choices.iter().copied().find(|&s| s > current)
            } else {
                choices.iter().rev().copied().find(|&s| s < current)
            };
            if let Some(size) = next {
                grid.set_page_size(size)?;
            }
        }
        Gesture::ToggleRow => {
            if let Some(id) = ui.cursor_row(grid).map(GridRow::row_id) {
                grid.toggle_row_selection(&id)?;
            }
        }
        Gesture::ToggleAll => grid.toggle_select_all()?,
        Gesture::ClearSelection => grid.clear_selection(),
    }

    if grid.state().page_index() != page_before {
        ui.cursor = 0;
    }
    ui.clamp(grid.view().visible_rows.len());
    Ok(())
}

/// The sortable column `delta` steps away from `from`, wrapping around.
fn step_sortable<T: GridRow>(grid: &Grid<T>, from: Option<usize>, delta: isize) -> Option<usize> {
    let sortable: Vec<usize> = grid
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.sortable)
        .map(|(i, _)| i)
        .collect();
    if sortable.is_empty() {
        return None;
    }
    let pos = from
        .and_then(|f| sortable.iter().position(|&i| i == f))
        .unwrap_or(0) as isize;
    let len = sortable.len() as isize;
    Some(sortable[(pos + delta).rem_euclid(len) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrconsole_lib::{CellValue, ColumnDescriptor, GridOptions, RowId, SortDirection};

    #[derive(Debug, Clone)]
    struct Shift {
        id: i64,
        who: &'static str,
    }

    impl GridRow for Shift {
        fn row_id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "who" => self.who.into(),
                _ => CellValue::Null,
            }
        }
    }

    fn grid() -> Grid<Shift> {
        let rows = ["Ana", "Ben", "Cleo", "Dev", "Eli"]
            .into_iter()
            .enumerate()
            .map(|(i, who)| Shift {
                id: i as i64 + 1,
                who,
            })
            .collect();
        Grid::with_rows(
            vec![
                ColumnDescriptor::new("id", "#"),
                ColumnDescriptor::new("note", "Note").unsortable(),
                ColumnDescriptor::new("who", "Who").searchable(),
            ],
            GridOptions::new()
                .page_size(2)
                .page_size_options([2, 4])
                .selectable(true),
            rows,
        )
        .unwrap()
    }

    #[test]
    fn test_focus_skips_unsortable_columns() {
        let mut grid = grid();
        let mut ui = GridUi::new(&grid);
        assert_eq!(ui.focused_column, Some(0));
        apply(&mut grid, &mut ui, Gesture::FocusColumn(1)).unwrap();
        assert_eq!(ui.focused_column, Some(2));
        apply(&mut grid, &mut ui, Gesture::FocusColumn(1)).unwrap();
        assert_eq!(ui.focused_column, Some(0));
    }

    #[test]
    fn test_sort_focused_column() {
        let mut grid = grid();
        let mut ui = GridUi::new(&grid);
        apply(&mut grid, &mut ui, Gesture::SortFocused).unwrap();
        apply(&mut grid, &mut ui, Gesture::SortFocused).unwrap();
        assert_eq!(grid.state().sort_direction(), Some(SortDirection::Desc));
        assert_eq!(ui.cursor_row(&grid).map(|s| s.who), Some("Eli"));
    }

    #[test]
    fn test_cursor_clamped_and_reset_on_page_change() {
        let mut grid = grid();
        let mut ui = GridUi::new(&grid);
        for _ in 0..5 {
            apply(&mut grid, &mut ui, Gesture::CursorDown).unwrap();
        }
        assert_eq!(ui.cursor, 1);
        apply(&mut grid, &mut ui, Gesture::LastPage).unwrap();
        assert_eq!(grid.state().page_index(), 2);
        assert_eq!(ui.cursor, 0);
    }

    #[test]
    fn test_page_size_steps_through_choices() {
        let mut grid = grid();
        let mut ui = GridUi::new(&grid);
        apply(&mut grid, &mut ui, Gesture::PageSizeUp).unwrap();
        assert_eq!(grid.state().page_size(), 4);
        apply(&mut grid, &mut ui, Gesture::PageSizeUp).unwrap();
        assert_eq!(grid.state().page_size(), 4);
        apply(&mut grid, &mut ui, Gesture::PageSizeDown).unwrap();
        assert_eq!(grid.state().page_size(), 2);
    }

    #[test]
    fn test_toggle_row_under_cursor() {
        let mut grid = grid();
        let mut ui = GridUi::new(&grid);
        apply(&mut grid, &mut ui, Gesture::CursorDown).unwrap();
        apply(&mut grid, &mut ui, Gesture::ToggleRow).unwrap();
        assert!(grid.is_selected(&RowId::Int(2)));
    }
}
