//! Item catalogs for the demo commands
//!
//! The built-in catalog is a short list of produce names; `--file` swaps it
//! for one item per line from a text file.

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Built-in catalog used when no file is given
pub const FRUITS: &[&str] = &[
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Quince",
    "Raspberry",
    "Strawberry",
    "Tangerine",
    "Ugli fruit",
    "Vanilla",
    "Watermelon",
    "Xigua",
    "Yellow passion fruit",
    "Zucchini",
    "Apricot",
    "Blueberry",
    "Cantaloupe",
    "Dragonfruit",
    "Eggplant",
];

/// The built-in catalog as owned strings
#[must_use]
pub fn builtin() -> Vec<String> {
    FRUITS.iter().map(ToString::to_string).collect()
}

/// Load `path` if given, else the built-in catalog
pub fn load(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    path.map_or_else(|| Ok(builtin()), load_lines)
}

/// Read one item per line, trimmed, skipping blank lines
pub fn load_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let items: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    log::debug!("loaded {} item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Items containing `term`, case-insensitively; an empty term matches nothing.
///
/// Whitespace is part of the term, so `" fruit"` only matches multi-word items.
#[must_use]
pub fn filter<'a>(items: &'a [String], term: &str) -> Vec<&'a str> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
