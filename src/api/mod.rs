//! HTTP API Module
//!
//! The transport surface of the anagram engine.
//!
//! ## Core Concepts
//! - **Handlers**: Axum request handlers mapping routes onto index mutations and
//!   the query pipeline.
//! - **Validation**: mode selectors and limits are resolved once at this
//!   boundary; the core below only sees validated parameters.
//! - **Errors**: malformed input (blank words, conflicting mode flags) becomes a
//!   `400`; "no data" conditions are normal empty responses, never errors.

pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;
