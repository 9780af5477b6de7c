use super::protocol::{AddWordsRequest, AddWordsResponse, AnagramsResponse};
use crate::index::store::AnagramIndex;
use crate::query::engine::find_anagrams;
use crate::query::types::{QueryOptions, SearchMode};
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct AnagramParams {
    /// Presence flag ("?proper"): include proper nouns.
    pub proper: Option<String>,
    /// Presence flag ("?scrabble"): match anagrams of letter subsets.
    pub scrabble: Option<String>,
    pub limit: Option<i64>,
}

/// Resolves raw query parameters into validated query options.
///
/// `proper` and `scrabble` are mutually exclusive mode selectors; an absent or
/// non-positive limit means unlimited.
pub fn resolve_options(params: &AnagramParams) -> Result<QueryOptions, &'static str> {
    let (mode, include_proper) = match (params.proper.is_some(), params.scrabble.is_some()) {
        (false, false) => (SearchMode::Strict, false),
        (true, false) => (SearchMode::Strict, true),
        (false, true) => (SearchMode::Scrabble, false),
        (true, true) => return Err("proper and scrabble are mutually exclusive"),
    };

    let limit = params
        .limit
        .and_then(|limit| usize::try_from(limit).ok())
        .filter(|limit| *limit > 0);

    Ok(QueryOptions {
        mode,
        include_proper,
        limit,
    })
}

/// Word path segments are accepted both bare and with a `.json` suffix.
fn path_word(raw: &str) -> &str {
    raw.strip_suffix(".json").unwrap_or(raw).trim()
}

pub async fn handle_add_words(
    Extension(index): Extension<Arc<AnagramIndex>>,
    Json(req): Json<AddWordsRequest>,
) -> (StatusCode, Json<AddWordsResponse>) {
    let mut added = 0;
    for word in &req.words {
        match index.add_word(word) {
            Ok(()) => added += 1,
            Err(e) => {
                tracing::warn!("Rejected bulk add after {} words: {}", added, e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(AddWordsResponse {
                        success: false,
                        added,
                    }),
                );
            }
        }
    }

    tracing::debug!("Added {} words to the corpus", added);
    (
        StatusCode::CREATED,
        Json(AddWordsResponse {
            success: true,
            added,
        }),
    )
}

pub async fn handle_anagrams(
    Path(raw_word): Path<String>,
    Query(params): Query<AnagramParams>,
    Extension(index): Extension<Arc<AnagramIndex>>,
) -> (StatusCode, Json<AnagramsResponse>) {
    let word = path_word(&raw_word);
    if word.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(AnagramsResponse { anagrams: vec![] }),
        );
    }

    let options = match resolve_options(&params) {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!("Rejected anagram query for {:?}: {}", word, e);
            return (
                StatusCode::BAD_REQUEST,
                Json(AnagramsResponse { anagrams: vec![] }),
            );
        }
    };

    let anagrams = find_anagrams(word, &index, &options);
    (StatusCode::OK, Json(AnagramsResponse { anagrams }))
}

pub async fn handle_delete_word(
    Path(raw_word): Path<String>,
    Extension(index): Extension<Arc<AnagramIndex>>,
) -> StatusCode {
    match index.remove_word(path_word(&raw_word)) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::warn!("Rejected word deletion: {}", e);
            StatusCode::BAD_REQUEST
        }
    }
}

pub async fn handle_delete_group(
    Path(raw_word): Path<String>,
    Extension(index): Extension<Arc<AnagramIndex>>,
) -> StatusCode {
    match index.remove_group(path_word(&raw_word)) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            tracing::warn!("Rejected group deletion: {}", e);
            StatusCode::BAD_REQUEST
        }
    }
}

pub async fn handle_clear_corpus(Extension(index): Extension<Arc<AnagramIndex>>) -> StatusCode {
    index.clear_all();
    tracing::info!("Corpus cleared");
    StatusCode::NO_CONTENT
}
