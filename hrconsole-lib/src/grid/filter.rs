//! Facet filter descriptors.

use crate::model::GridRow;

/// One choice of a facet filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Text shown in the dropdown.
    pub label: String,
    /// Value compared against the stringified field.
    pub value: String,
}

/// A discrete-value filter over one field.
///
/// A row passes when the stringified field at `key` equals the selected
/// option value exactly.
///
/// # Example
///
/// ```
/// use hrconsole_lib::FilterDescriptor;
///
/// let status = FilterDescriptor::new("status", "Status")
///     .option("Pending", "Pending")
///     .option("Approved", "Approved")
///     .option("Rejected", "Rejected");
/// assert_eq!(status.options.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// Field key the filter applies to.
    pub key: String,
    /// Dropdown label.
    pub label: String,
    /// Available choices.
    pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
    /// Creates a filter with no options.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option.
    pub fn option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(FilterOption {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Adds one option per value, using the value as its label.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            self.options.push(FilterOption {
                label: value.clone(),
                value,
            });
        }
        self
    }

    /// Finds the option with this value.
    pub fn find_option(&self, value: &str) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Returns `true` if the row's field equals `value`.
    pub fn matches<T: GridRow>(&self, row: &T, value: &str) -> bool {
        row.field(&self.key).to_string() == value
    }
}
