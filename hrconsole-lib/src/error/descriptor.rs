//! Descriptor validation errors

/// A column/filter configuration that can never produce a valid grid.
///
/// These are detected when the grid is constructed and indicate a bug in
/// the page that declared the descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// Two columns share the same key.
    #[error("duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// Two filters share the same key.
    #[error("duplicate filter key '{key}'")]
    DuplicateFilter { key: String },

    /// One filter lists the same option value twice.
    #[error("filter '{filter}' has duplicate option value '{value}'")]
    DuplicateOption { filter: String, value: String },

    /// A page size of zero was configured.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The page-size selector has no choices.
    #[error("page size options must not be empty")]
    NoPageSizeOptions,
}
