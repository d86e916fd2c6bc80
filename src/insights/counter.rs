use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::data::model::JobListing;

/// Case-insensitive count of `word` in the whole text of the file at `path`.
///
/// Occurrences are non-overlapping substrings, so `"java"` also counts inside
/// `"javascript"`.
pub fn count_occurrences(path: &Path, word: &str) -> Result<usize> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let count = count_in_text(&text, word);
    debug!("'{word}' occurs {count} times in {}", path.display());
    Ok(count)
}

/// Case-insensitive count of `word` across the values of one column.
///
/// Listings without the column contribute nothing.
pub fn count_in_column(listings: &[JobListing], column: &str, word: &str) -> usize {
    listings
        .iter()
        .filter_map(|listing| listing.get(column))
        .map(|value| count_in_text(value, word))
        .sum()
}

fn count_in_text(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(&word.to_lowercase()).count()
}
