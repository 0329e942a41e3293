//! Rows, columns, page responses and the messages a reload produces.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ConfigError, LoadError};

/// Field lookup for records shown through [`ColumnValue::Field`] columns.
///
/// Returning `None` renders an empty cell.
pub trait Row {
    /// Returns the display value of `key`, if the record has it.
    fn field(&self, key: &str) -> Option<String>;
}

impl Row for Value {
    fn field(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Row for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Row for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Computes a cell from a whole record.
pub type CellFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Where a column gets its cell values from.
pub enum ColumnValue<R> {
    /// Looks up a field by key through [`Row::field`].
    Field(String),
    /// Computes the cell from the record.
    Computed(CellFn<R>),
}

impl<R> Clone for ColumnValue<R> {
    fn clone(&self) -> Self {
        match self {
            ColumnValue::Field(key) => ColumnValue::Field(key.clone()),
            ColumnValue::Computed(f) => ColumnValue::Computed(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for ColumnValue<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Field(key) => f.debug_tuple("Field").field(key).finish(),
            ColumnValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A table column: a header name and a way to produce cells.
///
/// ```rust
/// use bubbletea_datatable::datatable::Column;
/// use serde_json::json;
///
/// let name = Column::field("Name", "name");
/// let upper = Column::computed("Shout", |row: &serde_json::Value| {
///     row["name"].as_str().unwrap_or_default().to_uppercase()
/// });
///
/// let row = json!({"name": "ada"});
/// assert_eq!(name.cell(&row), "ada");
/// assert_eq!(upper.cell(&row), "ADA");
/// ```
#[derive(Debug, Clone)]
pub struct Column<R> {
    /// Header text.
    pub name: String,
    /// Cell source.
    pub value: ColumnValue<R>,
    /// Fixed display width; measured from the content when `None`.
    pub width: Option<usize>,
}

impl<R> Column<R> {
    /// A column showing the record field `key`.
    pub fn field(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ColumnValue::Field(key.into()),
            width: None,
        }
    }

    /// A column computed from the whole record.
    pub fn computed<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            value: ColumnValue::Computed(Arc::new(f)),
            width: None,
        }
    }

    /// Fixes the display width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyColumnName { index });
        }
        if let ColumnValue::Field(key) = &self.value {
            if key.is_empty() {
                return Err(ConfigError::EmptyFieldKey {
                    name: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<R: Row> Column<R> {
    /// Produces the cell text for `row`.
    pub fn cell(&self, row: &R) -> String {
        match &self.value {
            ColumnValue::Field(key) => row.field(key).unwrap_or_default(),
            ColumnValue::Computed(f) => f(row),
        }
    }
}

/// One page as served by the loader.
///
/// Field names follow the common `{content, number, totalPages, size}` page
/// shape, so a loader can deserialize a response body straight into it.
///
/// ```rust
/// use bubbletea_datatable::datatable::PageResponse;
///
/// let body = r#"{"content": ["a", "b"], "number": 0, "totalPages": 3, "size": 2}"#;
/// let page: PageResponse<String> = serde_json::from_str(body).unwrap();
/// assert_eq!(page.total_pages, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<R> {
    /// Rows of the served page.
    pub content: Vec<R>,
    /// Zero-based index of the page actually served.
    pub number: usize,
    /// Total number of pages at the time of the request.
    pub total_pages: usize,
    /// Page size the server applied.
    pub size: usize,
}

/// Whether a reload is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No request in flight.
    #[default]
    Idle,
    /// A request has been issued and its response not yet applied.
    Loading,
}

/// Delivered when the loader returned a page.
///
/// `id` addresses the table that issued the request, `seq` the request
/// itself. Only the response to a table's latest request is applied.
#[derive(Debug, Clone)]
pub struct PageLoadedMsg<R> {
    /// Id of the issuing table.
    pub id: i64,
    /// Sequence number of the request.
    pub seq: u64,
    /// The served page.
    pub page: PageResponse<R>,
}

/// Delivered when the loader failed.
#[derive(Debug, Clone)]
pub struct PageLoadErrorMsg {
    /// Id of the issuing table.
    pub id: i64,
    /// Sequence number of the request.
    pub seq: u64,
    /// What went wrong.
    pub err: LoadError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_row_field_lookup() {
        let row = json!({"name": "ada", "age": 36, "admin": true, "note": null});
        assert_eq!(row.field("name"), Some("ada".to_string()));
        assert_eq!(row.field("age"), Some("36".to_string()));
        assert_eq!(row.field("admin"), Some("true".to_string()));
        assert_eq!(row.field("note"), None);
        assert_eq!(row.field("missing"), None);
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let column: Column<Value> = Column::field("Email", "email");
        assert_eq!(column.cell(&json!({"name": "ada"})), "");
    }

    #[test]
    fn test_map_rows() {
        let mut row = HashMap::new();
        row.insert("city".to_string(), "Oslo".to_string());
        let column = Column::field("City", "city");
        assert_eq!(column.cell(&row), "Oslo");
    }

    #[test]
    fn test_column_validation() {
        let blank: Column<Value> = Column::field("  ", "name");
        assert_eq!(blank.validate(3), Err(ConfigError::EmptyColumnName { index: 3 }));

        let keyless: Column<Value> = Column::field("Name", "");
        assert_eq!(
            keyless.validate(0),
            Err(ConfigError::EmptyFieldKey {
                name: "Name".to_string()
            })
        );

        let computed: Column<Value> = Column::computed("Len", |row: &Value| row.to_string());
        assert_eq!(computed.validate(0), Ok(()));
    }

    #[test]
    fn test_page_response_wire_names() {
        let page = PageResponse {
            content: vec![1, 2],
            number: 1,
            total_pages: 4,
            size: 2,
        };
        let encoded = serde_json::to_value(&page).unwrap();
        assert_eq!(
            encoded,
            json!({"content": [1, 2], "number": 1, "totalPages": 4, "size": 2})
        );
    }
}
