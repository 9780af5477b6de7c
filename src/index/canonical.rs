/// Derives the canonical group key for a word: lower-cased, characters sorted
/// ascending by code point.
///
/// Two words share a group key iff they are case-insensitive anagrams of each
/// other. Pure and deterministic; callers reject empty input before calling.
pub fn group_key(word: &str) -> String {
    let mut letters: Vec<char> = word.to_lowercase().chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// A word is a proper noun iff its first character is not its own lower-case
/// form. Locale-independent; the empty string is not a proper noun.
pub fn is_proper_noun(word: &str) -> bool {
    match word.chars().next() {
        Some(first) => first.to_lowercase().next() != Some(first),
        None => false,
    }
}
