use serde::{Deserialize, Serialize};

/// How the set of probe words is derived from the query word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// One probe: the query word itself.
    Strict,
    /// One probe per letter subset (length >= 2) of the query word.
    Scrabble,
}

/// Options for one query, resolved once at the API boundary.
///
/// The external "proper" mode selector maps to `Strict` with
/// `include_proper = true`.
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub mode: SearchMode,
    /// Include words whose first character is not its own lower-case form.
    pub include_proper: bool,
    /// Maximum number of results; `None` or zero means unlimited.
    pub limit: Option<usize>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::Strict,
            include_proper: false,
            limit: None,
        }
    }
}
