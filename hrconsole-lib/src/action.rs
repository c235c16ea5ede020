//! Row actions and their outcomes.
//!
//! Every action button in a grid's action column produces one
//! [`RowAction`], and the host page answers with one [`Outcome`]. The grid
//! itself never performs side effects.

use std::fmt;

pub use crate::error::ActionError;

/// The kind of action a row button triggers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    View,
    Edit,
    Delete,
    Approve,
    Reject,
    Generate,
    Download,
    /// Page-specific action identified by name.
    Custom(String),
}

impl ActionKind {
    /// Button label.
    pub fn label(&self) -> &str {
        match self {
            ActionKind::View => "View",
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
            ActionKind::Approve => "Approve",
            ActionKind::Reject => "Reject",
            ActionKind::Generate => "Generate",
            ActionKind::Download => "Download",
            ActionKind::Custom(name) => name,
        }
    }

    /// Lowercase verb used in messages ("cannot approve ...").
    pub fn verb(&self) -> String {
        self.label().to_lowercase()
    }

    /// Whether the action removes or irreversibly changes data and should be
    /// confirmed first.
    pub fn is_destructive(&self) -> bool {
        matches!(self, ActionKind::Delete | ActionKind::Reject)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action requested on one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction<T> {
    /// What to do.
    pub kind: ActionKind,
    /// The row's underlying record.
    pub row: T,
}

impl<T> RowAction<T> {
    /// Creates a new row action.
    pub fn new(kind: ActionKind, row: T) -> Self {
        Self { kind, row }
    }
}

/// A successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success {
    /// Human-readable summary of what happened.
    pub message: String,
}

impl Success {
    /// Creates a new success with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a host page handling an action.
pub type Outcome = Result<Success, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use crate::model::RowId;

    #[test]
    fn test_labels_and_verbs() {
        assert_eq!(ActionKind::Approve.label(), "Approve");
        assert_eq!(ActionKind::Approve.verb(), "approve");
        assert_eq!(ActionKind::Custom("Resend".into()).to_string(), "Resend");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = ActionError::invalid_transition(&ActionKind::Approve, "Rejected");
        assert_eq!(err.to_string(), "cannot approve a record that is Rejected");
    }

    #[test]
    fn test_repository_not_found_maps_to_not_found() {
        let err: ActionError = RepositoryError::NotFound(RowId::Int(4)).into();
        assert_eq!(err, ActionError::NotFound(RowId::Int(4)));
    }
}
