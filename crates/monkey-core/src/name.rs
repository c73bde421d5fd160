//! Monkey name normalization.
//!
//! Every lookup in the catalog and every key in the access tracker goes
//! through these helpers, so trimming and case folding happen in one place.

/// Trims surrounding whitespace from a name.
///
/// Returns `None` when nothing is left, which callers treat as "no name".
pub fn normalize(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Compares two names case-insensitively after trimming.
///
/// Uses full Unicode lowercase mapping without allocating.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.trim();
    let b = b.trim();
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
