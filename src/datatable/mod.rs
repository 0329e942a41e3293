//! A remotely paged data table component for bubbletea-rs.
//!
//! The table shows one page of rows fetched by a caller-supplied [`Loader`].
//! Navigation (previous/next page, jumping to a page number from the page
//! window, changing the page size) updates the pager and returns a reload
//! command. When the command completes, its message is passed back through
//! [`Model::update`], which reconciles the page index, total pages and page
//! size with what the server actually served.
//!
//! ## Reconciliation
//!
//! A response `{content, number, totalPages, size}` replaces the rows and sets
//! the page index to `min(number, totalPages - 1)`, so a request beyond the
//! end (the total shrank, or a page-size change shortened the list) snaps to
//! the nearest valid page. A failed load leaves rows and pagination untouched
//! and is exposed through [`Model::error`].
//!
//! ## Overlapping requests
//!
//! Every reload carries a sequence number. Only the response to the latest
//! request is applied; anything older is dropped when it arrives.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust,no_run
//! use bubbletea_datatable::datatable::{Column, Config, LoadError, Model as DataTable, PageResponse};
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use serde_json::{json, Value};
//!
//! struct App {
//!     table: DataTable<Value>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let loader = |page: usize, size: usize| async move {
//!             let content = (0..size)
//!                 .map(|i| json!({"id": (page - 1) * size + i}))
//!                 .collect();
//!             Ok::<_, LoadError>(PageResponse { content, number: page - 1, total_pages: 20, size })
//!         };
//!         let mut table = DataTable::new(Config::default(), vec![Column::field("Id", "id")], loader)
//!             .expect("valid table config");
//!         let cmd = table.reload();
//!         (Self { table }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.table.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.table.view()
//!     }
//! }
//! ```

mod config;
mod error;
mod keys;
mod loader;
mod model;
mod rendering;
mod types;


pub use config::{Config, DEFAULT_PAGE_SIZES};
pub use error::{ConfigError, LoadError};
pub use keys::DataTableKeyMap;
pub use loader::Loader;
pub use model::Model;
pub use rendering::Styles;
pub use types::{
    CellFn, Column, ColumnValue, LoadState, PageLoadErrorMsg, PageLoadedMsg, PageResponse, Row,
};
