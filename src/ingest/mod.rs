//! Ingestion Module
//!
//! The data intake pipeline: reads a dictionary file (one word per line) and
//! prepares it for seeding the index at process start. Blank and
//! whitespace-only lines are skipped rather than inserted.

pub mod loader;
