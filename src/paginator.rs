//! Pager state and page-window derivation for remotely paged tables.
//!
//! This module holds the part of pagination that involves no I/O: the current
//! page index, page size, total page count and the compact "page window" of
//! page numbers and ellipses offered to the user. The [`datatable`] component
//! wraps a [`Model`] and drives it from loader responses.
//!
//! [`datatable`]: crate::datatable
//!
//! # Page windows
//!
//! The first and last pages are always shown. Around them, a block of pages is
//! chosen from the active page and the radius, and every run of hidden pages
//! collapses into a single [`PageToken::Ellipsis`]:
//!
//! ```rust
//! use bubbletea_datatable::paginator::{page_window, PageToken::*};
//!
//! // Ten pages, radius 2, fifth page active (index 4).
//! assert_eq!(
//!     page_window(4, 10, 2),
//!     vec![Number(1), Ellipsis, Number(3), Number(4), Number(5), Number(6), Number(7), Ellipsis, Number(10)]
//! );
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Default number of rows requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page numbers shown on each side of the active page.
pub const DEFAULT_PAGE_RADIUS: usize = 2;

/// One entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A page that is shown literally, 1-based.
    Number(usize),
    /// One or more collapsed pages.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, or `None` for an ellipsis.
    pub fn number(&self) -> Option<usize> {
        match self {
            PageToken::Number(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    /// Returns true for [`PageToken::Ellipsis`].
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

/// Derives the page window for a zero-based `page_index`.
///
/// Pages `1` and `total_pages` are always shown. For the pages in between:
///
/// - when the active page sits in the first `2 * radius` pages, the first
///   `2 * radius + 1` pages are shown;
/// - otherwise, when it sits within `2 * radius` of the end, the last
///   `2 * radius + 1` pages are shown;
/// - otherwise the pages within `radius` of the active page are shown.
///
/// Hidden runs collapse into a single ellipsis. The function is total: an
/// index past the last page still yields a well-formed ascending window, and
/// arithmetic saturates instead of overflowing.
///
/// ```rust
/// use bubbletea_datatable::paginator::{page_window, PageToken::*};
///
/// assert!(page_window(0, 0, 2).is_empty());
/// assert_eq!(page_window(0, 1, 2), vec![Number(1)]);
/// assert_eq!(page_window(0, 10, 2), vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(10)]);
/// assert_eq!(page_window(9, 10, 2), vec![Number(1), Ellipsis, Number(6), Number(7), Number(8), Number(9), Number(10)]);
/// ```
pub fn page_window(page_index: usize, total_pages: usize, radius: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut window = vec![PageToken::Number(1)];
    if total_pages == 1 {
        return window;
    }

    let (low, high) = middle_block(page_index.saturating_add(1), total_pages, radius);
    let mut last = 1;
    if low <= high {
        if low > last + 1 {
            window.push(PageToken::Ellipsis);
        }
        window.extend((low..=high).map(PageToken::Number));
        last = high;
    }
    if total_pages > last + 1 {
        window.push(PageToken::Ellipsis);
    }
    window.push(PageToken::Number(total_pages));
    window
}

/// Inclusive range of shown pages strictly between the first and last page.
/// An empty block is returned as `low > high`.
fn middle_block(active: usize, total_pages: usize, radius: usize) -> (usize, usize) {
    let span = radius.saturating_mul(2);
    let inner_last = total_pages - 1;

    if active < span.saturating_add(1) {
        (2, span.saturating_add(1).min(inner_last))
    } else if active.saturating_add(span) > total_pages {
        (total_pages.saturating_sub(span).max(2), inner_last)
    } else {
        (
            active.saturating_sub(radius).max(2),
            active.saturating_add(radius).min(inner_last),
        )
    }
}

/// Styles used when rendering the pager line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The active page number.
    pub active_page: Style,
    /// Any other page number.
    pub page: Style,
    /// Collapsed pages.
    pub ellipsis: Style,
    /// Enabled previous/next arrows.
    pub arrow: Style,
    /// Arrows that cannot be followed (first or last page).
    pub disabled_arrow: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subtle = Style::new().foreground(lipgloss::AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        Self {
            active_page: Style::new().bold(true),
            page: Style::new(),
            ellipsis: subtle.clone(),
            arrow: Style::new(),
            disabled_arrow: subtle,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Derived {
    is_first: bool,
    is_last: bool,
    window: Vec<PageToken>,
}

/// Pager state: page index, page size, total pages and page radius.
///
/// Every mutating method finishes by recomputing the derived views
/// ([`is_first_page`](Model::is_first_page), [`is_last_page`](Model::is_last_page)
/// and [`window`](Model::window)), so a reader never observes a window that
/// disagrees with the stored state.
///
/// `total_pages` is `None` until the first [`reconcile`](Model::reconcile).
///
/// ```rust
/// use bubbletea_datatable::paginator::Model;
///
/// let mut pager = Model::new();
/// assert_eq!(pager.total_pages(), None);
/// assert!(pager.window().is_empty());
///
/// pager.reconcile(0, 10, 25);
/// assert_eq!(pager.per_page(), 25);
/// assert!(pager.next_page());
/// assert_eq!(pager.page(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    page: usize,
    per_page: usize,
    total_pages: Option<usize>,
    radius: usize,
    derived: Derived,
    /// Styles for [`view`](Model::view).
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        let mut model = Self {
            page: 0,
            per_page: DEFAULT_PAGE_SIZE,
            total_pages: None,
            radius: DEFAULT_PAGE_RADIUS,
            derived: Derived::default(),
            styles: Styles::default(),
        };
        model.refresh();
        model
    }
}

impl Model {
    /// Creates a pager on the first page with default size and radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the page radius (builder pattern).
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self.refresh();
        self
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// 1-based number of the current page.
    pub fn active_page(&self) -> usize {
        self.page.saturating_add(1)
    }

    /// Rows requested per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Total pages last reported by the loader.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_pages
    }

    /// Number of page numbers shown on each side of the active page.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// True when the current page index is 0.
    pub fn is_first_page(&self) -> bool {
        self.derived.is_first
    }

    /// True when the current page is the last known page.
    ///
    /// Always false while the total is unknown or zero.
    pub fn is_last_page(&self) -> bool {
        self.derived.is_last
    }

    /// The current page window.
    pub fn window(&self) -> &[PageToken] {
        &self.derived.window
    }

    /// Moves to the previous page. Returns false when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.refresh();
        true
    }

    /// Moves to the next page. Returns false on the last page or while the
    /// total is unknown.
    pub fn next_page(&mut self) -> bool {
        match self.total_pages {
            Some(total) if self.page.saturating_add(1) < total => {
                self.page += 1;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Jumps to the first page. Returns false when already there.
    pub fn first_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page = 0;
        self.refresh();
        true
    }

    /// Jumps to the last known page. Returns false when already there or while
    /// the total is unknown.
    pub fn last_page(&mut self) -> bool {
        match self.total_pages {
            Some(total) if total > 0 && self.page != total - 1 => {
                self.page = total - 1;
                self.refresh();
                true
            }
            _ => false,
        }
    }

    /// Sets the page from a 1-based page number without bounds checking.
    ///
    /// Page `0` maps to the first page. Out-of-range pages are accepted; the
    /// next [`reconcile`](Model::reconcile) brings the index back in range.
    pub fn go_to_page(&mut self, page_number: usize) {
        self.page = page_number.saturating_sub(1);
        self.refresh();
    }

    /// Sets the zero-based page index, clamped to the last known page.
    ///
    /// While the total is unknown the index is taken as given.
    pub fn set_page(&mut self, page: usize) {
        self.page = match self.total_pages {
            Some(total) => page.min(total.saturating_sub(1)),
            None => page,
        };
        self.refresh();
    }

    /// Sets the page size. Returns false, leaving the size untouched, for 0.
    pub fn set_per_page(&mut self, per_page: usize) -> bool {
        if per_page == 0 {
            return false;
        }
        self.per_page = per_page;
        true
    }

    /// Sets the page radius.
    pub fn set_radius(&mut self, radius: usize) {
        self.radius = radius;
        self.refresh();
    }

    /// Overwrites the pager with the values a page response reported.
    ///
    /// `number` is the zero-based page the server served. It is clamped to
    /// `total_pages - 1`, or to 0 when there are no pages. A `size` of 0 is
    /// ignored so the page size stays positive.
    pub fn reconcile(&mut self, number: usize, total_pages: usize, size: usize) {
        self.page = number.min(total_pages.saturating_sub(1));
        self.total_pages = Some(total_pages);
        if size > 0 {
            self.per_page = size;
        }
        self.refresh();
    }

    /// Renders the pager as `« 1 … 4 [5] 6 … 10 »`.
    ///
    /// Returns an empty string while there is at most one page.
    pub fn view(&self) -> String {
        if self.total_pages.unwrap_or(0) <= 1 {
            return String::new();
        }

        let arrow = |glyph: &str, disabled: bool| {
            let style = if disabled {
                &self.styles.disabled_arrow
            } else {
                &self.styles.arrow
            };
            style.clone().inline(true).render(glyph)
        };

        let mut parts = Vec::with_capacity(self.derived.window.len() + 2);
        parts.push(arrow("«", self.derived.is_first));
        for token in &self.derived.window {
            let part = match token {
                PageToken::Number(n) if *n == self.active_page() => self
                    .styles
                    .active_page
                    .clone()
                    .inline(true)
                    .render(&format!("[{n}]")),
                PageToken::Number(n) => self.styles.page.clone().inline(true).render(&n.to_string()),
                PageToken::Ellipsis => self.styles.ellipsis.clone().inline(true).render("…"),
            };
            parts.push(part);
        }
        parts.push(arrow("»", self.derived.is_last));
        parts.join(" ")
    }

    fn refresh(&mut self) {
        let total = self.total_pages.unwrap_or(0);
        self.derived = Derived {
            is_first: self.page == 0,
            is_last: total.checked_sub(1) == Some(self.page),
            window: page_window(self.page, total, self.radius),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Number};
    use super::*;

    /// Page-by-page evaluation of the window rules, used as a reference.
    fn reference_window(page_index: usize, total: usize, radius: usize) -> Vec<PageToken> {
        let active = page_index as i64 + 1;
        let total_i = total as i64;
        let r = radius as i64;
        let mut out = Vec::new();
        let mut last: Option<PageToken> = None;
        for page in 1..=total_i {
            let shown = if page == 1 || page == total_i {
                true
            } else if active < 2 * r + 1 {
                page <= 2 * r + 1
            } else if active > total_i - 2 * r {
                total_i - 2 * r <= page
            } else {
                (active - page).abs() <= r
            };
            let elem = if shown {
                Number(page as usize)
            } else {
                Ellipsis
            };
            if elem != Ellipsis || last != Some(Ellipsis) {
                out.push(elem);
            }
            last = Some(elem);
        }
        out
    }

    fn strip(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_window(0, 10, 2),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(4, 10, 2),
            vec![
                Number(1),
                Ellipsis,
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Ellipsis,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_window(9, 10, 2),
            vec![Number(1), Ellipsis, Number(6), Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn test_window_single_page() {
        for radius in 0..4 {
            for index in 0..3 {
                assert_eq!(page_window(index, 1, radius), vec![Number(1)]);
            }
        }
    }

    #[test]
    fn test_window_empty_when_no_pages() {
        assert!(page_window(0, 0, 2).is_empty());
        assert!(page_window(7, 0, 0).is_empty());
    }

    #[test]
    fn test_window_radius_zero() {
        assert_eq!(
            page_window(4, 10, 0),
            vec![Number(1), Ellipsis, Number(5), Ellipsis, Number(10)]
        );
        assert_eq!(page_window(0, 10, 0), vec![Number(1), Ellipsis, Number(10)]);
        assert_eq!(page_window(1, 3, 0), vec![Number(1), Number(2), Number(3)]);
    }

    #[test]
    fn test_window_small_totals_show_everything() {
        assert_eq!(page_window(0, 2, 2), vec![Number(1), Number(2)]);
        assert_eq!(
            page_window(2, 5, 2),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_window_matches_reference_rules() {
        for total in 0..=30 {
            for radius in 0..=5 {
                for index in 0..total.max(1) {
                    assert_eq!(
                        page_window(index, total, radius),
                        reference_window(index, total, radius),
                        "total={total} radius={radius} index={index}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_is_ascending_with_single_ellipses() {
        for total in 1..=40 {
            for radius in 0..=4 {
                for index in 0..total {
                    let window = page_window(index, total, radius);
                    assert_eq!(window.first(), Some(&Number(1)));
                    assert_eq!(window.last(), Some(&Number(total)));

                    let numbers: Vec<usize> = window.iter().filter_map(PageToken::number).collect();
                    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                    assert!(window.windows(2).all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())));
                    assert!(numbers.contains(&(index + 1)));

                    for pair in window.windows(3) {
                        if let [Number(a), Ellipsis, Number(b)] = pair {
                            assert!(b - a > 1);
                        }
                    }
                    for pair in window.windows(2) {
                        if let [Number(a), Number(b)] = pair {
                            assert_eq!(b - a, 1);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_out_of_range_index_is_well_formed() {
        let window = page_window(50, 10, 2);
        assert_eq!(
            window,
            vec![Number(1), Ellipsis, Number(6), Number(7), Number(8), Number(9), Number(10)]
        );
        assert_eq!(page_window(usize::MAX, 10, usize::MAX).first(), Some(&Number(1)));
        assert_eq!(page_window(usize::MAX, 10, usize::MAX).last(), Some(&Number(10)));
    }

    #[test]
    fn test_model_defaults() {
        let pager = Model::new();
        assert_eq!(pager.page(), 0);
        assert_eq!(pager.per_page(), DEFAULT_PAGE_SIZE);
        assert_eq!(pager.radius(), DEFAULT_PAGE_RADIUS);
        assert_eq!(pager.total_pages(), None);
        assert!(pager.is_first_page());
        assert!(!pager.is_last_page());
        assert!(pager.window().is_empty());
    }

    #[test]
    fn test_prev_page_at_start_is_noop() {
        let mut pager = Model::new();
        pager.reconcile(0, 5, 10);
        assert!(!pager.prev_page());
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut pager = Model::new();
        pager.reconcile(3, 5, 10);
        assert!(pager.next_page());
        assert!(pager.is_last_page());
        assert!(!pager.next_page());
        assert_eq!(pager.page(), 4);
    }

    #[test]
    fn test_next_page_unknown_total_is_noop() {
        let mut pager = Model::new();
        assert!(!pager.next_page());
        assert!(!pager.last_page());
    }

    #[test]
    fn test_first_and_last_page_jumps() {
        let mut pager = Model::new();
        pager.reconcile(2, 8, 10);
        assert!(pager.last_page());
        assert_eq!(pager.page(), 7);
        assert!(!pager.last_page());
        assert!(pager.first_page());
        assert_eq!(pager.page(), 0);
        assert!(!pager.first_page());
    }

    #[test]
    fn test_go_to_page_is_unchecked() {
        let mut pager = Model::new();
        pager.reconcile(0, 5, 10);
        pager.go_to_page(40);
        assert_eq!(pager.page(), 39);
        assert!(!pager.is_last_page());
        pager.go_to_page(0);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_reconcile_clamps_index() {
        let mut pager = Model::new();
        pager.go_to_page(9);
        pager.reconcile(7, 5, 10);
        assert_eq!(pager.page(), 4);
        assert_eq!(pager.total_pages(), Some(5));
        assert!(pager.is_last_page());
    }

    #[test]
    fn test_reconcile_zero_pages() {
        let mut pager = Model::new();
        pager.go_to_page(3);
        pager.reconcile(2, 0, 10);
        assert_eq!(pager.page(), 0);
        assert!(pager.window().is_empty());
        assert!(!pager.is_last_page());
    }

    #[test]
    fn test_set_page_clamps_to_known_total() {
        let mut pager = Model::new();
        pager.set_page(7);
        assert_eq!(pager.page(), 7);

        pager.reconcile(0, 5, 10);
        pager.set_page(7);
        assert_eq!(pager.page(), 4);
        assert!(pager.is_last_page());
        assert_eq!(pager.window().last(), Some(&PageToken::Number(5)));
    }

    #[test]
    fn test_set_per_page_rejects_zero() {
        let mut pager = Model::new();
        assert!(!pager.set_per_page(0));
        assert_eq!(pager.per_page(), DEFAULT_PAGE_SIZE);
        assert!(pager.set_per_page(50));
        assert_eq!(pager.per_page(), 50);
    }

    #[test]
    fn test_window_follows_radius_change() {
        let mut pager = Model::new();
        pager.reconcile(4, 10, 10);
        pager.set_radius(0);
        assert_eq!(pager.window(), &[Number(1), Ellipsis, Number(5), Ellipsis, Number(10)]);
    }

    #[test]
    fn test_view_hidden_for_single_page() {
        let mut pager = Model::new();
        assert_eq!(pager.view(), "");
        pager.reconcile(0, 1, 10);
        assert_eq!(pager.view(), "");
    }

    #[test]
    fn test_view_marks_active_page() {
        let mut pager = Model::new();
        pager.reconcile(4, 10, 10);
        assert_eq!(strip(&pager.view()), "« 1 … 3 4 [5] 6 7 … 10 »");
    }
}
