//! Anagram Search Server Library
//!
//! This library crate defines the core modules that make up the anagram search engine.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`api`**: The HTTP surface. Axum request handlers and the DTOs exchanged
//!   with clients (bulk add, anagram queries, the three deletion granularities).
//! - **`index`**: The core state layer. A concurrent in-memory index mapping
//!   canonical group keys to the set of distinct words sharing that key.
//! - **`ingest`**: The data intake pipeline. Loads a dictionary file and seeds
//!   the index at process start.
//! - **`query`**: The core retrieval logic. Contains the letter-subset generator
//!   and the query pipeline (lookup, filter, dedupe, order, limit).

pub mod api;
pub mod index;
pub mod ingest;
pub mod query;
