//! API Protocol
//!
//! Defines the route templates and Data Transfer Objects (DTOs) of the HTTP
//! surface (bulk add, anagram queries, deletions).
//!
//! The route shapes follow the original service contract: word path segments
//! are accepted both bare and with a `.json` suffix, which the handlers strip.

use serde::{Deserialize, Serialize};

// --- Routes ---

/// Corpus endpoint: POST adds a batch of words, DELETE clears everything.
pub const ENDPOINT_WORDS: &str = "/words.json";
/// Query endpoint (GET); DELETE removes the word's entire anagram group.
pub const ENDPOINT_ANAGRAMS: &str = "/anagrams/:word";
/// Deletion endpoint for a single word.
pub const ENDPOINT_DELETE_WORD: &str = "/words/:word";

// --- Data Transfer Objects ---

/// Body of a bulk add request.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordsRequest {
    /// The words to insert; each is added idempotently.
    pub words: Vec<String>,
}

/// Acknowledgment for a bulk add.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordsResponse {
    /// False iff the batch was rejected (blank entry).
    pub success: bool,
    /// Number of words inserted before the batch completed or was rejected.
    pub added: usize,
}

/// Response for an anagram query.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnagramsResponse {
    /// Matching words, ordered by length then lexicographically, no duplicates.
    pub anagrams: Vec<String>,
}
