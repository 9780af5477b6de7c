use super::subsets::letter_subsets;
use super::types::{QueryOptions, SearchMode};
use crate::index::canonical::{group_key, is_proper_noun};
use crate::index::store::AnagramIndex;
use std::collections::HashSet;

pub fn find_anagrams(word: &str, index: &AnagramIndex, options: &QueryOptions) -> Vec<String> {
    // No empty-string or single-letter anagram groups are meaningful; skip the
    // index (and subset generation) entirely.
    if word.chars().count() <= 1 {
        return Vec::new();
    }

    let mut matches: HashSet<String> = HashSet::new();
    match options.mode {
        SearchMode::Strict => {
            matches.extend(index.lookup_group(&group_key(word)));
            // A word is never its own anagram.
            matches.remove(word);
        }
        SearchMode::Scrabble => {
            for probe in letter_subsets(word) {
                matches.extend(index.lookup_group(&group_key(&probe)));
            }
        }
    }

    if !options.include_proper {
        matches.retain(|candidate| !is_proper_noun(candidate));
    }

    let mut results: Vec<String> = matches.into_iter().collect();
    // Length means character count, not byte length; the two diverge for
    // non-ASCII dictionary entries.
    results.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });

    if let Some(limit) = options.limit {
        if limit > 0 {
            results.truncate(limit);
        }
    }

    results
}
