//! Sort state and value comparison.

use std::cmp::Ordering;

use crate::model::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on a column.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// The sort that follows `current` when the header of `key` is activated.
    ///
    /// The same column cycles `asc -> desc -> unsorted`; another column starts
    /// at `asc`.
    pub fn cycle(current: Option<&SortState>, key: &str) -> Option<SortState> {
        match current {
            Some(sort) if sort.key == key => match sort.direction {
                SortDirection::Asc => Some(SortState::desc(key)),
                SortDirection::Desc => None,
            },
            _ => Some(SortState::asc(key)),
        }
    }
}

/// Compares two cell values for sorting.
///
/// Null and empty text sort last regardless of direction. Two numbers compare numerically,
/// two dates chronologically, two booleans `false < true`. Anything else is
/// compared as text.
pub fn compare_values(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_blank(), b.is_blank()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = compare_present(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

fn compare_present(a: &CellValue, b: &CellValue) -> Ordering {
    if let Some(ord) = a.compare_numeric(b) {
        return ord;
    }
    match (a, b) {
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        _ => compare_text(&a.to_string(), &b.to_string()),
    }
}

/// Case-insensitive text ordering with an exact tiebreak.
///
/// "amy" and "Amy" land next to each other instead of splitting around
/// the uppercase alphabet.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
