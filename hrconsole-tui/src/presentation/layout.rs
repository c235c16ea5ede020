//! Horizontal layout of grid columns.
//!
//! Regular columns flow left to right and are cut off when space runs out.
//! Sticky columns and the action column are pinned to the right edge.

use hrconsole_lib::{ActionKind, Grid, GridRow};

use crate::input::action_key;
use crate::ui::Rect;
use crate::ui::text::display_width;

/// Width of the selection checkbox column.
const CHECKBOX_WIDTH: u16 = 4;
/// Gap between columns.
const GAP: u16 = 1;
/// Bounds for auto-sized columns.
const MIN_AUTO_WIDTH: u16 = 3;
const MAX_AUTO_WIDTH: u16 = 32;
/// Space for the sort indicator after a header.
const INDICATOR_WIDTH: usize = 2;

/// What a slot draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Checkbox,
    /// Index into the grid's columns.
    Column(usize),
    Actions,
}

/// A positioned column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub kind: SlotKind,
    pub x: u16,
    pub width: u16,
}

/// Hotkey and label of each row action, e.g. `v View  x Delete`.
pub fn action_labels(actions: &[ActionKind]) -> String {
    actions
        .iter()
        .map(|kind| match action_key(kind) {
            Some(key) => format!("{} {}", key, kind.label()),
            None => kind.label().to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Position every column of `grid` inside `area`, sized for the rows on the
/// current page.
pub fn layout_columns<T: GridRow>(grid: &Grid<T>, area: Rect) -> Vec<Slot> {
    let view = grid.view();
    let mut slots = Vec::new();
    let mut left = area.x;
    let mut right = area.right();

    if grid.options().is_selectable() {
        slots.push(Slot {
            kind: SlotKind::Checkbox,
            x: left,
            width: CHECKBOX_WIDTH.min(area.width),
        });
        left = left.saturating_add(CHECKBOX_WIDTH);
    }

    let desired = |index: usize| -> u16 {
        let column = &grid.columns()[index];
        if column.width > 0 {
            return column.width;
        }
        let header = display_width(&column.header) + INDICATOR_WIDTH;
        let widest = view
            .visible_rows
            .iter()
            .map(|row| display_width(&column.cell(row).text))
            .max()
            .unwrap_or(0);
        (header.max(widest) as u16).clamp(MIN_AUTO_WIDTH, MAX_AUTO_WIDTH)
    };

    let mut pinned = Vec::new();
    let actions = grid.options().actions();
    if !actions.is_empty() {
        let width = display_width(&action_labels(actions)).max("Actions".len()) as u16;
        pinned.push((SlotKind::Actions, width));
    }
    for (index, column) in grid.columns().iter().enumerate().rev() {
        if column.sticky {
            pinned.push((SlotKind::Column(index), desired(index)));
        }
    }
    for (kind, width) in pinned {
        if right.saturating_sub(width) < left {
            break;
        }
        right -= width;
        slots.push(Slot {
            kind,
            x: right,
            width,
        });
        right = right.saturating_sub(GAP);
    }

    for (index, column) in grid.columns().iter().enumerate() {
        if column.sticky {
            continue;
        }
        if left >= right {
            break;
        }
        let width = desired(index).min(right - left);
        slots.push(Slot {
            kind: SlotKind::Column(index),
            x: left,
            width,
        });
        left = left.saturating_add(width + GAP);
    }

    slots.sort_by_key(|slot| slot.x);
    slots
}
