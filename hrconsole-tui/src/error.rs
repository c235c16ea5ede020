//! Top-level application errors.

use thiserror::Error;

use hrconsole_lib::error::{GridError, RepositoryError};

use crate::settings::ConfigError;

/// Fatal errors that end the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("page setup failed: {0}")]
    Grid(#[from] GridError),
    #[error("cannot load records: {0}")]
    Repository(#[from] RepositoryError),
    #[error("unknown page '{0}'")]
    UnknownPage(String),
}
