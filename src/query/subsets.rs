/// Enumerates every letter subset of `word` with at least two characters.
///
/// Subsets are combinations of character positions: each candidate keeps its
/// characters in their original positional order and letters are never
/// permuted (given "ab", the probe "ab" is produced but "ba" never is).
/// Candidates are not deduplicated here; repeated letters may yield the same
/// string more than once and duplicates collapse at the result level.
pub fn letter_subsets(word: &str) -> impl Iterator<Item = String> {
    let letters: Vec<char> = word.chars().collect();
    // Bitmask enumeration covers words up to 63 letters, far beyond any
    // natural-language query word.
    let total = if letters.len() < 64 {
        1u64 << letters.len()
    } else {
        0
    };

    (1..total)
        .filter(|mask| mask.count_ones() >= 2)
        .map(move |mask| {
            letters
                .iter()
                .enumerate()
                .filter(|(position, _)| mask & (1u64 << position) != 0)
                .map(|(_, letter)| *letter)
                .collect()
        })
}
