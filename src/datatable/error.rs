//! Error types for the data table.

use thiserror::Error;

/// Invalid construction input, reported by [`Model::new`](super::Model::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The page size must be at least 1.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The page-size menu has no entries.
    #[error("page-size menu must not be empty")]
    EmptyPageSizes,
    /// An entry in the page-size menu is 0.
    #[error("page-size menu entry at position {index} is 0")]
    ZeroPageSizeOption {
        /// Position of the offending entry.
        index: usize,
    },
    /// A column was declared without a name.
    #[error("column {index} has an empty name")]
    EmptyColumnName {
        /// Position of the offending column.
        index: usize,
    },
    /// A field column was declared without a field key.
    #[error("column '{name}' looks up an empty field key")]
    EmptyFieldKey {
        /// Name of the offending column.
        name: String,
    },
}

/// A failed page load.
///
/// Loaders return [`LoadError::Failed`] for transport or server failures; the
/// table itself produces [`LoadError::InvalidResponse`] when a response breaks
/// the page contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader could not produce a page.
    #[error("page load failed: {0}")]
    Failed(String),
    /// The loader produced a page that cannot be reconciled.
    #[error("invalid page response: {0}")]
    InvalidResponse(String),
}

impl LoadError {
    /// Wraps any displayable error as [`LoadError::Failed`].
    pub fn failed(err: impl std::fmt::Display) -> Self {
        LoadError::Failed(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_is_invalid_response() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{\"content\": [")
            .unwrap_err()
            .into();
        assert!(matches!(err, LoadError::InvalidResponse(_)));
        assert!(err.to_string().starts_with("invalid page response"));
    }

    #[test]
    fn test_failed_wraps_display() {
        assert_eq!(
            LoadError::failed("timeout"),
            LoadError::Failed("timeout".to_string())
        );
    }
}
