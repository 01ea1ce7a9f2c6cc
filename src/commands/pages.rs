//! Pages command - show one page of a collection

use std::path::PathBuf;

use pagekit::catalog;
use pagekit::core::Pagination;
use pagekit::output::{OutputMode, PageReport};

/// What to page and where to land
#[derive(Debug)]
pub struct PageRequest {
    /// Synthetic collection size (`Item 1`..`Item N`)
    pub total: Option<usize>,
    /// File with one item per line
    pub file: Option<PathBuf>,
    /// Page size
    pub items_per_page: usize,
    /// Page to jump to first
    pub page: i64,
    /// Pages to advance after the jump
    pub next: usize,
    /// Pages to go back after that
    pub prev: usize,
}

/// Show one page
pub fn pages(request: &PageRequest, output_mode: OutputMode) -> anyhow::Result<()> {
    let items = match request.total {
        Some(_) => None,
        None => Some(catalog::load(request.file.as_deref())?),
    };
    let total_items = request.total.unwrap_or_else(|| items.as_ref().map_or(0, Vec::len));

    let mut pagination = Pagination::new(total_items, request.items_per_page, 1);
    pagination.go_to_page(request.page);
    for _ in 0..request.next {
        if !pagination.can_next_page() {
            break;
        }
        pagination.next_page();
    }
    for _ in 0..request.prev {
        if !pagination.can_prev_page() {
            break;
        }
        pagination.prev_page();
    }

    let page_items = items.as_ref().map_or_else(
        || pagination.range().map(|i| format!("Item {}", i + 1)).collect(),
        |items| pagination.slice(items).to_vec(),
    );

    PageReport {
        page: pagination.snapshot(),
        items: page_items,
    }
    .render(output_mode);

    Ok(())
}
