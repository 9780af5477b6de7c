//! Anagram Index Module
//!
//! Implements the concurrent in-memory store that groups words by letter composition.
//!
//! ## Core Concepts
//! - **Canonicalization**: every word maps to a group key (lower-cased, characters
//!   sorted). Two words share a key iff they are case-insensitive anagrams.
//! - **Set semantics**: a group never holds duplicate words; adding a word twice
//!   leaves the group unchanged.
//! - **No empty groups**: a group emptied by removal is deleted outright; absence
//!   of a key and an empty group are the same observable state.
//! - **Access**: `AnagramIndex` hands out owned copies of group contents. Callers
//!   never hold a live reference into the store.

pub mod canonical;
pub mod store;
