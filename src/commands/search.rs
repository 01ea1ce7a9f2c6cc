//! Search command - debounced search over a catalog
//!
//! Each stdin line replaces the query. The query only runs once no new line
//! has arrived for the configured delay, so a burst of lines produces a
//! single search for the last one. A `:delay <ms>` line changes the delay.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use pagekit::catalog;
use pagekit::core::DebouncedValue;
use pagekit::output::{OutputMode, SearchReport};

/// A parsed stdin line
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Delay(u64),
}

fn parse_input(line: &str) -> Option<Input> {
    let Some(rest) = line.strip_prefix(":delay") else {
        return Some(Input::Query(line.to_string()));
    };
    match rest.trim().parse() {
        Ok(ms) => Some(Input::Delay(ms)),
        Err(_) => {
            log::warn!("ignoring invalid delay: {:?}", rest.trim());
            None
        },
    }
}

/// Run the interactive search until stdin closes
pub fn search(delay: Duration, file: Option<&Path>, output_mode: OutputMode) -> anyhow::Result<()> {
    let items = catalog::load(file)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    runtime.block_on(run(items, delay, output_mode))
}

async fn run(items: Vec<String>, delay: Duration, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut query = DebouncedValue::new(String::new(), delay);
    let mut settled = query.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if output_mode == OutputMode::Human {
        eprintln!("Type to search ({}ms debounce, Ctrl-D to quit)", delay.as_millis());
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(line) => match parse_input(&line) {
                        Some(Input::Query(text)) => query.set_value(text),
                        Some(Input::Delay(ms)) => query.set_delay(Duration::from_millis(ms)),
                        None => {},
                    },
                    None => break,
                }
            }
            Ok(()) = settled.changed() => {
                let term = settled.borrow_and_update().clone();
                report(&items, term, query.delay(), output_mode);
            }
        }
    }

    // stdin closed; let the last query settle
    if let Some(term) = last_settled(&query, &mut settled).await {
        report(&items, term, query.delay(), output_mode);
    }
    Ok(())
}

/// The query that settled but was not reported yet, waiting for a pending one
async fn last_settled(
    query: &DebouncedValue<String>,
    settled: &mut watch::Receiver<String>,
) -> Option<String> {
    let unseen = settled.has_changed().unwrap_or(false);
    if unseen || (query.is_pending() && settled.changed().await.is_ok()) {
        return Some(settled.borrow_and_update().clone());
    }
    None
}

fn report(items: &[String], term: String, delay: Duration, output_mode: OutputMode) {
    log::debug!("running search for {term:?}");
    let results = catalog::filter(items, &term).into_iter().map(String::from).collect();
    SearchReport {
        term,
        delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        results,
    }
    .render(output_mode);
}
