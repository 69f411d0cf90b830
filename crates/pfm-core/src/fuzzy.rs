//! Channel selector matching.
//!
//! A selector is a list of words separated by commas and/or spaces, e.g.
//! `"r,g"` or `"depth normal"`. A channel name matches when it contains
//! any of the words, ignoring case. The index of the first matching word is
//! the match rank, which loaders use to order the selected channels.

/// Matches `name` against `pattern`, returning the rank of the first
/// matching word.
///
/// An empty pattern (or one made only of separators) matches everything
/// with rank `0`.
///
/// # Example
///
/// ```rust
/// use pfm_core::matches_fuzzy;
///
/// assert_eq!(matches_fuzzy("R", ""), Some(0));
/// assert_eq!(matches_fuzzy("B", "g,b"), Some(1));
/// assert_eq!(matches_fuzzy("diffuse.R", "DIFFUSE"), Some(0));
/// assert_eq!(matches_fuzzy("R", "g b"), None);
/// ```
pub fn matches_fuzzy(name: &str, pattern: &str) -> Option<usize> {
    let name = name.to_lowercase();
    let pattern = pattern.to_lowercase();

    let mut words = pattern
        .split([',', ' '])
        .filter(|w| !w.is_empty())
        .peekable();

    if words.peek().is_none() {
        return Some(0);
    }

    words.position(|word| name.contains(word))
}
