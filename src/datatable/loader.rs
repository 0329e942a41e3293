//! The asynchronous page source behind a data table.

use std::future::Future;

use async_trait::async_trait;

use super::error::LoadError;
use super::types::PageResponse;

/// Fetches one page of rows.
///
/// `page` is 1-based and `size` is at least 1. Implementations own any
/// transport, query-string or timeout policy; the table only sees the
/// resulting [`PageResponse`] or [`LoadError`].
///
/// Any `Fn(usize, usize) -> impl Future<Output = Result<PageResponse<R>, LoadError>>`
/// is a loader:
///
/// ```rust
/// use bubbletea_datatable::datatable::{LoadError, Loader, PageResponse};
///
/// fn numbers() -> impl Loader<u32> {
///     |page: usize, size: usize| async move {
///         let start = ((page - 1) * size) as u32;
///         Ok::<_, LoadError>(PageResponse {
///             content: (start..start + size as u32).collect(),
///             number: page - 1,
///             total_pages: 10,
///             size,
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait Loader<R>: Send + Sync {
    /// Loads page `page` (1-based) with `size` rows.
    async fn load(&self, page: usize, size: usize) -> Result<PageResponse<R>, LoadError>;
}

#[async_trait]
impl<R, F, Fut> Loader<R> for F
where
    R: Send + 'static,
    F: Fn(usize, usize) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResponse<R>, LoadError>> + Send + 'static,
{
    async fn load(&self, page: usize, size: usize) -> Result<PageResponse<R>, LoadError> {
        (self)(page, size).await
    }
}
