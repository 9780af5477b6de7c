use anyhow::{Context, Result};
use std::path::Path;

/// Splits raw dictionary text into seedable words: one per line, trimmed,
/// blank lines skipped.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a dictionary file, one word per line.
pub fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
    Ok(parse_lines(&text))
}
