//! The data table model: pager state, loaded rows and the reload cycle.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::{debug, warn};

use super::config::Config;
use super::error::{ConfigError, LoadError};
use super::keys::DataTableKeyMap;
use super::loader::Loader;
use super::rendering::Styles;
use super::types::{Column, LoadState, PageLoadErrorMsg, PageLoadedMsg, PageResponse};
use crate::paginator::{self, PageToken};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A remotely paged table.
///
/// The model owns the pager state, the rows of the current page and the
/// loader that fetches pages. Navigation methods update the pager and return
/// a reload [`Cmd`]; the command runs the loader and yields a
/// [`PageLoadedMsg`] or [`PageLoadErrorMsg`], which [`update`](Model::update)
/// reconciles into the model.
///
/// Only the response to the most recent request is applied. Responses to
/// earlier requests, to a cancelled request or addressed to another table are
/// ignored, so rapid navigation can never leave an older page on screen.
///
/// Nothing is loaded on construction; the host issues the first
/// [`reload`](Model::reload), typically from its own `init`.
///
/// ```rust
/// use bubbletea_datatable::datatable::{Column, Config, LoadError, Model, PageResponse};
/// use serde_json::{json, Value};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = |page: usize, size: usize| async move {
///     Ok::<_, LoadError>(PageResponse {
///         content: vec![json!({"name": format!("row {page}")})],
///         number: page - 1,
///         total_pages: 3,
///         size,
///     })
/// };
/// let mut table: Model<Value> =
///     Model::new(Config::default(), vec![Column::field("Name", "name")], loader)?;
///
/// let cmd = table.reload();
/// if let Some(msg) = cmd.await {
///     table.update(&msg);
/// }
/// assert_eq!(table.total_pages(), Some(3));
/// # Ok(())
/// # }
/// ```
pub struct Model<R> {
    id: i64,
    seq: u64,
    pager: paginator::Model,
    served: (usize, usize),
    items: Vec<R>,
    columns: Vec<Column<R>>,
    page_sizes: Vec<usize>,
    loader: Arc<dyn Loader<R>>,
    state: LoadState,
    error: Option<LoadError>,
    /// Key bindings handled by [`update`](Model::update).
    pub keymap: DataTableKeyMap,
    /// Styles for [`view`](Model::view).
    pub styles: Styles,
}

impl<R> fmt::Debug for Model<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("seq", &self.seq)
            .field("pager", &self.pager)
            .field("served", &self.served)
            .field("items", &self.items.len())
            .field("columns", &self.columns.len())
            .field("page_sizes", &self.page_sizes)
            .field("state", &self.state)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<R> Model<R>
where
    R: Clone + Send + 'static,
{
    /// Creates a table on the first page.
    ///
    /// Fails when the configuration or a column is invalid.
    pub fn new<L>(config: Config, columns: Vec<Column<R>>, loader: L) -> Result<Self, ConfigError>
    where
        L: Loader<R> + 'static,
    {
        config.validate()?;
        for (index, column) in columns.iter().enumerate() {
            column.validate(index)?;
        }

        let pager = paginator::Model::new()
            .with_per_page(config.page_size)
            .with_radius(config.page_radius);

        Ok(Self {
            id: next_id(),
            seq: 0,
            served: (pager.page(), pager.per_page()),
            pager,
            items: Vec::new(),
            columns,
            page_sizes: config.page_sizes,
            loader: Arc::new(loader),
            state: LoadState::Idle,
            error: None,
            keymap: DataTableKeyMap::default(),
            styles: Styles::default(),
        })
    }

    /// Seeds the rows shown before the first load completes (builder pattern).
    pub fn with_items(mut self, items: Vec<R>) -> Self {
        self.items = items;
        self
    }

    /// Unique id of this table; load messages carry it.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Rows of the current page.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Column descriptors.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.pager.page()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.pager.per_page()
    }

    /// Total pages last reported by the loader, `None` before the first load.
    pub fn total_pages(&self) -> Option<usize> {
        self.pager.total_pages()
    }

    /// Page numbers shown on each side of the active page.
    pub fn page_radius(&self) -> usize {
        self.pager.radius()
    }

    /// Sizes offered by the page-size menu.
    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// True on the first page.
    pub fn is_first_page(&self) -> bool {
        self.pager.is_first_page()
    }

    /// True on the last known page.
    pub fn is_last_page(&self) -> bool {
        self.pager.is_last_page()
    }

    /// Page numbers and ellipses to offer as pagination controls.
    pub fn page_window(&self) -> &[PageToken] {
        self.pager.window()
    }

    /// The underlying pager.
    pub fn pager(&self) -> &paginator::Model {
        &self.pager
    }

    /// Whether a reload is outstanding.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// True while a reload is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// The failure of the most recent reload, cleared by the next success.
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    /// Goes to the previous page, or returns `None` on the first page.
    pub fn prev_page(&mut self) -> Option<Cmd> {
        self.pager.prev_page().then(|| self.reload())
    }

    /// Goes to the next page, or returns `None` on the last page and while
    /// the total is unknown.
    pub fn next_page(&mut self) -> Option<Cmd> {
        self.pager.next_page().then(|| self.reload())
    }

    /// Jumps to the first page, or returns `None` when already there.
    pub fn first_page(&mut self) -> Option<Cmd> {
        self.pager.first_page().then(|| self.reload())
    }

    /// Jumps to the last known page, or returns `None` when already there.
    pub fn last_page(&mut self) -> Option<Cmd> {
        self.pager.last_page().then(|| self.reload())
    }

    /// Goes to a 1-based page number taken from the page window.
    ///
    /// The number is not checked against the total; the reload reconciles an
    /// out-of-range request to whatever page the loader actually served.
    pub fn go_to_page(&mut self, page_number: usize) -> Cmd {
        self.pager.go_to_page(page_number);
        self.reload()
    }

    /// Changes the page size and reloads the current page index.
    ///
    /// Any positive size is accepted, whether or not it is in the menu. A
    /// size of 0 is ignored and returns `None`.
    pub fn set_page_size(&mut self, size: usize) -> Option<Cmd> {
        if !self.pager.set_per_page(size) {
            warn!(table = self.id, "ignoring page size of 0");
            return None;
        }
        Some(self.reload())
    }

    /// Switches to the next larger size of the page-size menu, wrapping to
    /// the smallest one.
    pub fn cycle_page_size(&mut self) -> Option<Cmd> {
        let current = self.pager.per_page();
        let next = self
            .page_sizes
            .iter()
            .copied()
            .filter(|size| *size > current)
            .min()
            .or_else(|| self.page_sizes.iter().copied().min())?;
        if next == current {
            return None;
        }
        self.set_page_size(next)
    }

    /// Requests the current page from the loader.
    ///
    /// The returned command asks for page `page_index + 1` with the current
    /// page size. Issuing a new reload supersedes any outstanding one.
    pub fn reload(&mut self) -> Cmd {
        self.seq += 1;
        self.state = LoadState::Loading;

        let id = self.id;
        let seq = self.seq;
        let page = self.pager.active_page();
        let size = self.pager.per_page();
        debug!(table = id, seq, page, size, "requesting page");

        let loader = Arc::clone(&self.loader);
        Box::pin(async move {
            let msg: Msg = match loader.load(page, size).await {
                Ok(response) => Box::new(PageLoadedMsg {
                    id,
                    seq,
                    page: response,
                }),
                Err(err) => Box::new(PageLoadErrorMsg { id, seq, err }),
            };
            Some(msg)
        })
    }

    /// Abandons the outstanding reload, if any.
    ///
    /// Its response is ignored when it arrives. The table keeps its current
    /// rows, returns to the page index and size they were served with, and
    /// goes back to [`LoadState::Idle`].
    pub fn cancel(&mut self) {
        if self.state == LoadState::Loading {
            debug!(table = self.id, seq = self.seq, "cancelling page request");
            self.seq += 1;
            self.state = LoadState::Idle;
            self.restore_served();
        }
    }

    /// Handles load results and key presses.
    ///
    /// Returns a reload command when a key press navigated.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<PageLoadedMsg<R>>() {
            if self.is_current(loaded.id, loaded.seq) {
                self.apply(&loaded.page);
            }
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<PageLoadErrorMsg>() {
            if self.is_current(failed.id, failed.seq) {
                self.fail(failed.err.clone());
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.prev_page.matches(key_msg) {
            self.prev_page()
        } else if self.keymap.next_page.matches(key_msg) {
            self.next_page()
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page()
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page()
        } else if self.keymap.cycle_page_size.matches(key_msg) {
            self.cycle_page_size()
        } else if self.keymap.reload.matches(key_msg) {
            Some(self.reload())
        } else {
            None
        }
    }

    fn is_current(&self, id: i64, seq: u64) -> bool {
        if id != self.id {
            return false;
        }
        if self.state != LoadState::Loading || seq != self.seq {
            debug!(
                table = self.id,
                seq,
                latest = self.seq,
                "discarding stale page response"
            );
            return false;
        }
        true
    }

    fn apply(&mut self, page: &PageResponse<R>) {
        if page.size == 0 {
            self.fail(LoadError::InvalidResponse(
                "page size must be at least 1".to_string(),
            ));
            return;
        }

        self.items = page.content.clone();
        self.pager.reconcile(page.number, page.total_pages, page.size);
        self.served = (self.pager.page(), self.pager.per_page());
        self.state = LoadState::Idle;
        self.error = None;
        debug!(
            table = self.id,
            seq = self.seq,
            page_index = self.pager.page(),
            total_pages = page.total_pages,
            size = page.size,
            rows = self.items.len(),
            "page loaded"
        );
    }

    fn fail(&mut self, err: LoadError) {
        warn!(table = self.id, seq = self.seq, error = %err, "page load failed");
        self.state = LoadState::Idle;
        self.error = Some(err);
        self.restore_served();
    }

    /// Puts the pager back on the page and size the current rows came from.
    fn restore_served(&mut self) {
        let (page, size) = self.served;
        self.pager.set_per_page(size);
        self.pager.set_page(page);
    }
}
