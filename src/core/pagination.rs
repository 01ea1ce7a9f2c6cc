//! Pagination state
//!
//! A [`Pagination`] tracks which page of a logical collection the caller asked
//! for and derives everything else (page count, slice bounds, navigation
//! flags) from the current inputs on every read. The requested page is kept
//! as-is and clamped on read, so changing the page size or item count can
//! never expose an out-of-range page.
//!
//! # Examples
//!
//! ```
//! use pagekit::core::Pagination;
//!
//! let mut pages = Pagination::with_total(123);
//! assert_eq!(pages.total_pages(), 13);
//! assert_eq!((pages.start_index(), pages.end_index()), (0, 9));
//!
//! pages.go_to_page(13);
//! assert_eq!((pages.start_index(), pages.end_index()), (120, 122));
//! assert_eq!(pages.items_on_current_page(), 3);
//! assert!(!pages.can_next_page());
//! ```

use std::fmt;
use std::ops::{Range, RangeInclusive};

use serde::Serialize;

/// Page size used when none is given
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page requested when none is given
pub const DEFAULT_INITIAL_PAGE: i64 = 1;

/// Construction options for [`Pagination`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Items per page (zero is treated as one)
    pub items_per_page: usize,
    /// First page to request (clamped on read)
    pub initial_page: i64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            initial_page: DEFAULT_INITIAL_PAGE,
        }
    }
}

/// Every derived value of a [`Pagination`] at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    /// Size of the paged collection
    pub total_items: usize,
    /// Page size
    pub items_per_page: usize,
    /// Current page, 1-based and always within `1..=total_pages`
    pub current_page: usize,
    /// Number of pages, never less than one
    pub total_pages: usize,
    /// Zero-based index of the first item on the page
    pub start_index: usize,
    /// Zero-based inclusive index of the last item on the page, `-1` when empty
    pub end_index: i64,
    /// Number of items on the current page
    pub items_on_current_page: usize,
    /// Whether a next page exists
    pub can_next_page: bool,
    /// Whether a previous page exists
    pub can_prev_page: bool,
}

impl PageSnapshot {
    /// Derive a snapshot from raw inputs
    #[must_use]
    pub fn compute(total_items: usize, items_per_page: usize, requested_page: i64) -> Self {
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page).max(1);
        let current_page = clamp_page(requested_page, total_pages);
        let start_index = (current_page - 1) * items_per_page;

        let (end_index, items_on_current_page) = if total_items == 0 {
            (-1, 0)
        } else {
            let end = start_index
                .saturating_add(items_per_page - 1)
                .min(total_items - 1);
            (to_signed(end), end - start_index + 1)
        };

        Self {
            total_items,
            items_per_page,
            current_page,
            total_pages,
            start_index,
            end_index,
            items_on_current_page,
            can_next_page: current_page < total_pages,
            can_prev_page: current_page > 1,
        }
    }

    /// Half-open index range of the page, empty when there are no items
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.items_on_current_page
    }
}

/// Handle returned by [`Pagination::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&PageSnapshot) + Send>;

/// Client-side pagination state over a collection of `total_items`
pub struct Pagination {
    total_items: usize,
    items_per_page: usize,
    requested_page: i64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Pagination {
    /// Create pagination state; nothing is validated, out-of-range values are clamped on read
    #[must_use]
    pub fn new(total_items: usize, items_per_page: usize, initial_page: i64) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            requested_page: initial_page,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create pagination state with the default page size, starting on page one
    #[must_use]
    pub fn with_total(total_items: usize) -> Self {
        Self::with_options(total_items, PaginationOptions::default())
    }

    /// Create pagination state from [`PaginationOptions`]
    #[must_use]
    pub fn with_options(total_items: usize, options: PaginationOptions) -> Self {
        Self::new(total_items, options.items_per_page, options.initial_page)
    }

    /// All derived values for the current inputs
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::compute(self.total_items, self.items_per_page, self.requested_page)
    }

    /// Size of the paged collection
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Page size
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The page last asked for, possibly out of range
    #[must_use]
    pub const fn requested_page(&self) -> i64 {
        self.requested_page
    }

    /// Current page, clamped to `1..=total_pages`
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.snapshot().current_page
    }

    /// Number of pages (at least one, even for an empty collection)
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.snapshot().total_pages
    }

    /// Index of the first item on the current page
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.snapshot().start_index
    }

    /// Inclusive index of the last item on the current page.
    ///
    /// This is `-1` for an empty collection, which means "no items". Use
    /// [`Pagination::range`] or [`Pagination::slice`] to avoid handling it.
    #[must_use]
    pub fn end_index(&self) -> i64 {
        self.snapshot().end_index
    }

    /// Number of items on the current page
    #[must_use]
    pub fn items_on_current_page(&self) -> usize {
        self.snapshot().items_on_current_page
    }

    /// Whether [`Pagination::next_page`] would move
    #[must_use]
    pub fn can_next_page(&self) -> bool {
        self.snapshot().can_next_page
    }

    /// Whether [`Pagination::prev_page`] would move
    #[must_use]
    pub fn can_prev_page(&self) -> bool {
        self.snapshot().can_prev_page
    }

    /// Half-open index range of the current page
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.snapshot().range()
    }

    /// The current page's items out of `items`.
    ///
    /// If `items` is shorter than `total_items` the slice is truncated
    /// instead of panicking.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Page numbers for rendering page controls
    #[must_use]
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Jump to page `page`, clamped to the valid range
    pub fn go_to_page(&mut self, page: i64) {
        let before = self.snapshot();
        self.requested_page = to_signed(clamp_page(page, before.total_pages));
        log::trace!("go_to_page({page}) -> {}", self.requested_page);
        self.notify_if_changed(&before);
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) {
        let before = self.snapshot();
        if before.can_next_page {
            self.requested_page = to_signed(before.current_page + 1);
            self.notify_if_changed(&before);
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) {
        let before = self.snapshot();
        if before.can_prev_page {
            self.requested_page = to_signed(before.current_page - 1);
            self.notify_if_changed(&before);
        }
    }

    /// Change the collection size; the current page is re-clamped on read
    pub fn set_total_items(&mut self, total_items: usize) {
        let before = self.snapshot();
        self.total_items = total_items;
        self.notify_if_changed(&before);
    }

    /// Change the page size (zero is treated as one)
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        let before = self.snapshot();
        self.items_per_page = items_per_page.max(1);
        self.notify_if_changed(&before);
    }

    /// Register a callback run synchronously after every observable change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&PageSnapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() < len_before
    }

    fn notify_if_changed(&mut self, before: &PageSnapshot) {
        let after = self.snapshot();
        if after == *before {
            return;
        }
        log::debug!(
            "page {} of {} (items {}..={})",
            after.current_page,
            after.total_pages,
            after.start_index,
            after.end_index
        );
        for (_, observer) in &mut self.observers {
            observer(&after);
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::with_total(0)
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("total_items", &self.total_items)
            .field("items_per_page", &self.items_per_page)
            .field("requested_page", &self.requested_page)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn clamp_page(requested: i64, total_pages: usize) -> usize {
    if requested < 1 {
        return 1;
    }
    usize::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
}

fn to_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
