// src/remap/utils.rs

/// Trim surrounding whitespace from a cell. Covers the `\r` left behind by
/// CRLF line endings.
pub fn clean_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Case-insensitive substring match used to pick columns out of a header.
pub fn header_contains(header: &str, needle: &str) -> bool {
    header.to_lowercase().contains(needle)
}
