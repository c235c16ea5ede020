//! Row action errors

use crate::action::ActionKind;
use crate::model::RowId;

use super::RepositoryError;

/// Why a host page refused or failed a row action.
///
/// This is the domain side of an action's outcome. Turning it into a
/// notification is up to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The row no longer exists.
    #[error("record '{0}' not found")]
    NotFound(RowId),

    /// The record is not in a state that allows this action.
    #[error("cannot {action} a record that is {state}")]
    InvalidTransition { action: String, state: String },

    /// The record failed a field check.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// The page does not offer this action.
    #[error("action '{0}' is not supported here")]
    Unsupported(ActionKind),

    /// The repository rejected the change.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ActionError {
    /// Creates an invalid transition error.
    pub fn invalid_transition(action: &ActionKind, state: impl Into<String>) -> Self {
        Self::InvalidTransition {
            action: action.verb(),
            state: state.into(),
        }
    }

    /// Creates a validation error for a field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for ActionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ActionError::NotFound(id),
            other => ActionError::Repository(other),
        }
    }
}
