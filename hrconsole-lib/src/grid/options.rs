//! Grid construction options.

use std::collections::HashSet;

use crate::action::ActionKind;
use crate::error::DescriptorError;

use super::column::ColumnDescriptor;
use super::filter::FilterDescriptor;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default choices offered by the page-size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// A button in the grid toolbar, handled by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarAction {
    /// Identifier passed back to the host.
    pub id: String,
    /// Button label.
    pub label: String,
    /// Key that triggers the action.
    pub hotkey: Option<char>,
}

impl ToolbarAction {
    /// Creates a toolbar action.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hotkey: None,
        }
    }

    /// Bind a key to the action.
    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }
}

/// Options for building a [`Grid`](super::Grid).
///
/// # Example
///
/// ```
/// use hrconsole_lib::{ActionKind, FilterDescriptor, GridOptions};
///
/// let options = GridOptions::new()
///     .filter(FilterDescriptor::new("dept", "Department").values(["HR", "Eng"]))
///     .search_placeholder("Search employees...")
///     .selectable(true)
///     .page_size(25)
///     .row_actions([ActionKind::View, ActionKind::Edit, ActionKind::Delete]);
/// assert_eq!(options.page_size_value(), 25);
/// ```
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub(crate) filters: Vec<FilterDescriptor>,
    pub(crate) search_placeholder: String,
    pub(crate) selectable: bool,
    pub(crate) page_size: usize,
    pub(crate) page_size_options: Vec<usize>,
    pub(crate) toolbar_actions: Vec<ToolbarAction>,
    pub(crate) row_actions: Vec<ActionKind>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            search_placeholder: "Search...".to_string(),
            selectable: false,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            toolbar_actions: Vec::new(),
            row_actions: Vec::new(),
        }
    }
}

impl GridOptions {
    /// Options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facet filter.
    pub fn filter(mut self, filter: FilterDescriptor) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace all facet filters.
    pub fn filters(mut self, filters: Vec<FilterDescriptor>) -> Self {
        self.filters = filters;
        self
    }

    /// Placeholder shown in the empty search box.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Enable row selection checkboxes.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Initial rows per page.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Choices offered by the page-size selector.
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Add a toolbar button.
    pub fn toolbar_action(mut self, action: ToolbarAction) -> Self {
        self.toolbar_actions.push(action);
        self
    }

    /// Actions offered in each row's action column.
    pub fn row_actions(mut self, actions: impl IntoIterator<Item = ActionKind>) -> Self {
        self.row_actions = actions.into_iter().collect();
        self
    }

    /// Facet filters.
    pub fn filter_descriptors(&self) -> &[FilterDescriptor] {
        &self.filters
    }

    /// Search placeholder.
    pub fn placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Whether rows can be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Initial page size.
    pub fn page_size_value(&self) -> usize {
        self.page_size
    }

    /// Page-size choices, ascending, always containing the initial size.
    pub fn page_size_choices(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Toolbar buttons.
    pub fn toolbar(&self) -> &[ToolbarAction] {
        &self.toolbar_actions
    }

    /// Row action column entries.
    pub fn actions(&self) -> &[ActionKind] {
        &self.row_actions
    }

    /// Checks the descriptors and normalizes the page-size choices.
    pub(crate) fn validate<T>(
        &mut self,
        columns: &[ColumnDescriptor<T>],
    ) -> Result<(), DescriptorError> {
        let mut keys = HashSet::new();
        for column in columns {
            if !keys.insert(column.key.as_str()) {
                return Err(DescriptorError::DuplicateColumn {
                    key: column.key.clone(),
                });
            }
        }

        let mut filter_keys = HashSet::new();
        for filter in &self.filters {
            if !filter_keys.insert(filter.key.as_str()) {
                return Err(DescriptorError::DuplicateFilter {
                    key: filter.key.clone(),
                });
            }
            let mut values = HashSet::new();
            for option in &filter.options {
                if !values.insert(option.value.as_str()) {
                    return Err(DescriptorError::DuplicateOption {
                        filter: filter.key.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        if self.page_size == 0 {
            return Err(DescriptorError::ZeroPageSize);
        }
        if self.page_size_options.is_empty() {
            return Err(DescriptorError::NoPageSizeOptions);
        }
        if self.page_size_options.contains(&0) {
            return Err(DescriptorError::ZeroPageSize);
        }
        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        Ok(())
    }
}
