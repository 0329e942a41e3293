#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datatable/")]

//! # bubbletea-datatable
//!
//! A remotely paged data table for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications. The table fetches one page at a time through a caller-supplied
//! async loader and offers a compact page window (`1 … 4 5 [6] 7 8 … 20`) for
//! navigation.
//!
//! ## Overview
//!
//! - [`paginator`]: pure pager state and the page-window algorithm. No I/O.
//! - [`datatable`]: the table component. Navigation returns reload commands;
//!   load results come back through `update` and are reconciled into the pager.
//! - [`key`]: key bindings and the [`KeyMap`] help trait.
//!
//! ## Page windows
//!
//! ```rust
//! use bubbletea_datatable::paginator::{page_window, PageToken::*};
//!
//! assert_eq!(
//!     page_window(0, 10, 2),
//!     vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(10)]
//! );
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust,no_run
//! use bubbletea_datatable::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use serde_json::Value;
//!
//! struct App {
//!     table: PageController<Value>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let loader = |page: usize, size: usize| async move {
//!             // Fetch `page` (1-based) with `size` rows from your backend here.
//!             Ok::<_, LoadError>(PageResponse { content: Vec::<Value>::new(), number: page - 1, total_pages: 0, size })
//!         };
//!         let mut table = PageController::new(
//!             DataTableConfig::default(),
//!             vec![Column::field("Name", "name")],
//!             loader,
//!         )
//!         .expect("valid table config");
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
//!
//! ## Logging
//!
//! Requests, stale responses and failures are reported through [`tracing`]
//! under this crate's target. The crate installs no subscriber.

pub mod datatable;
pub mod key;
pub mod paginator;

pub use datatable::{
    Column, ColumnValue, Config as DataTableConfig, ConfigError, DataTableKeyMap, LoadError,
    LoadState, Loader, Model as PageController, PageLoadErrorMsg, PageLoadedMsg, PageResponse,
    Row,
};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use paginator::{page_window, Model as Paginator, PageToken};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_datatable::prelude::*;
///
/// let window = page_window(4, 10, 2);
/// assert_eq!(window[1], PageToken::Ellipsis);
/// ```
pub mod prelude {
    pub use crate::datatable::{
        Column, ColumnValue, Config as DataTableConfig, ConfigError, DataTableKeyMap, LoadError,
        LoadState, Loader, Model as PageController, PageLoadErrorMsg, PageLoadedMsg,
        PageResponse, Row,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{page_window, Model as Paginator, PageToken};
}
