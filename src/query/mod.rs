//! Query Service Module
//!
//! The core component responsible for answering anagram queries against the index.
//!
//! ## Overview
//! This module implements the retrieval pipeline for the anagram engine. It
//! bridges the HTTP API layer with the underlying index store.
//!
//! ## Responsibilities
//! - **Probing**: deriving the set of probe words for a query (the word itself,
//!   or every qualifying letter subset in scrabble mode).
//! - **Fusion**: unioning the group lookups of all probes into one result set.
//! - **Shaping**: proper-noun filtering, deduplication, (length, lexicographic)
//!   ordering, and limit truncation.
//!
//! ## Submodules
//! - **`engine`**: Contains the query pipeline.
//! - **`subsets`**: Letter-subset enumeration for scrabble mode.
//! - **`types`**: Query configuration types resolved at the API boundary.

pub mod engine;
pub mod subsets;
pub mod types;
