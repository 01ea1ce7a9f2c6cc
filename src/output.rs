//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::PageSnapshot;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Pages shown on each side of the current page in the page controls
const CONTROL_WINDOW: usize = 2;

/// One slot in the rendered page controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A page number
    Page(usize),
    /// Elided run of pages
    Gap,
}

/// Page controls for `current` of `total`: first, last, and a window around current
#[must_use]
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    let low = current.saturating_sub(CONTROL_WINDOW).max(1);
    let high = (current + CONTROL_WINDOW).min(total);

    let mut controls = Vec::new();
    if low > 1 {
        controls.push(PageControl::Page(1));
        if low > 2 {
            controls.push(PageControl::Gap);
        }
    }
    controls.extend((low..=high).map(PageControl::Page));
    if high < total {
        if high + 1 < total {
            controls.push(PageControl::Gap);
        }
        controls.push(PageControl::Page(total));
    }
    controls
}

/// Result of a `pages` command
#[derive(Debug, Serialize)]
pub struct PageReport {
    /// Derived pagination values
    #[serde(flatten)]
    pub page: PageSnapshot,
    /// Items on the current page
    pub items: Vec<String>,
}

/// Result of one settled search term
#[derive(Debug, Serialize)]
pub struct SearchReport {
    /// The debounced search term
    pub term: String,
    /// Quiet period the term waited out
    pub delay_ms: u64,
    /// Matching items
    pub results: Vec<String>,
}

impl PageReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let page = &self.page;
        println!("Page {} of {}", page.current_page, page.total_pages);

        if page.items_on_current_page == 0 {
            println!("No items.");
        } else {
            println!(
                "Showing {}-{} of {} item(s)",
                page.start_index + 1,
                page.end_index + 1,
                page.total_items
            );
        }
        println!();

        for (offset, item) in self.items.iter().enumerate() {
            println!("  {:>4}. {}", page.start_index + offset + 1, item);
        }
        if !self.items.is_empty() {
            println!();
        }

        let prev = if page.can_prev_page {
            "< prev".normal()
        } else {
            "< prev".dimmed()
        };
        let next = if page.can_next_page {
            "next >".normal()
        } else {
            "next >".dimmed()
        };
        let controls: Vec<String> = page_controls(page.current_page, page.total_pages)
            .into_iter()
            .map(|control| match control {
                PageControl::Page(n) if n == page.current_page => {
                    format!("[{n}]").green().bold().to_string()
                },
                PageControl::Page(n) => n.to_string(),
                PageControl::Gap => "...".to_string(),
            })
            .collect();
        println!("{prev}  {}  {next}", controls.join(" "));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl SearchReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.term.is_empty() {
            println!("Type to see results.");
            return;
        }

        println!("Searching for: {} (after {}ms)", self.term.bold(), self.delay_ms);
        if self.results.is_empty() {
            println!("  No results found.");
        } else {
            for result in &self.results {
                println!("  {result}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string(self).unwrap_or_default());
    }
}
