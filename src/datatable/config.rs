//! Construction settings for the data table.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::paginator::{DEFAULT_PAGE_RADIUS, DEFAULT_PAGE_SIZE};

/// Page sizes offered by the page-size menu unless configured otherwise.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Paging settings for a [`Model`](super::Model).
///
/// Missing fields take their defaults when deserialized, so a partial
/// document such as `{"pageSize": 25}` is valid.
///
/// ```rust
/// use bubbletea_datatable::datatable::Config;
///
/// let config = Config::default().with_page_size(25).with_page_radius(1);
/// assert!(config.validate().is_ok());
///
/// let parsed: Config = serde_json::from_str(r#"{"pageSize": 50}"#).unwrap();
/// assert_eq!(parsed.page_size, 50);
/// assert_eq!(parsed.page_radius, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Rows requested per page before the server confirms a size.
    pub page_size: usize,
    /// Page numbers shown on each side of the active page.
    pub page_radius: usize,
    /// Sizes offered by the page-size menu.
    pub page_sizes: Vec<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_radius: DEFAULT_PAGE_RADIUS,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
        }
    }
}

impl Config {
    /// Sets the initial page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page radius (builder pattern).
    pub fn with_page_radius(mut self, page_radius: usize) -> Self {
        self.page_radius = page_radius;
        self
    }

    /// Replaces the page-size menu (builder pattern).
    pub fn with_page_sizes(mut self, page_sizes: Vec<usize>) -> Self {
        self.page_sizes = page_sizes;
        self
    }

    /// Checks the settings.
    ///
    /// The initial page size does not have to appear in the menu.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.page_sizes.is_empty() {
            return Err(ConfigError::EmptyPageSizes);
        }
        if let Some(index) = self.page_sizes.iter().position(|size| *size == 0) {
            return Err(ConfigError::ZeroPageSizeOption { index });
        }
        Ok(())
    }
}
