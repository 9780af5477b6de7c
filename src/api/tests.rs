//! API Module Tests
//!
//! Validates boundary validation and the HTTP contract.
//!
//! ## Test Scopes
//! - **Options**: resolution of the mode selectors and limit parameter.
//! - **Protocol**: JSON compatibility of the DTOs.
//! - **Handlers**: end-to-end handler behavior against a shared index.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{
        AnagramParams, handle_add_words, handle_anagrams, handle_clear_corpus,
        handle_delete_group, handle_delete_word, resolve_options,
    };
    use crate::api::protocol::{AddWordsRequest, AddWordsResponse, AnagramsResponse};
    use crate::index::store::AnagramIndex;
    use crate::query::types::SearchMode;
    use axum::Json;
    use axum::extract::{Extension, Path, Query};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn flag() -> Option<String> {
        // A valueless query parameter ("?proper") deserializes to an empty string
        Some(String::new())
    }

    fn seeded_extension(words: &[&str]) -> Extension<Arc<AnagramIndex>> {
        let index = AnagramIndex::new();
        index.seed(words);
        Extension(Arc::new(index))
    }

    async fn query(
        index: &Extension<Arc<AnagramIndex>>,
        word: &str,
        params: AnagramParams,
    ) -> (StatusCode, Json<AnagramsResponse>) {
        handle_anagrams(Path(word.to_string()), Query(params), index.clone()).await
    }

    // ============================================================
    // OPTION RESOLUTION TESTS
    // ============================================================

    #[test]
    fn test_default_params_resolve_to_strict() {
        let options = resolve_options(&AnagramParams::default()).unwrap();

        assert_eq!(options.mode, SearchMode::Strict);
        assert!(!options.include_proper);
        assert!(options.limit.is_none());
    }

    #[test]
    fn test_proper_flag_keeps_strict_mode() {
        let options = resolve_options(&AnagramParams {
            proper: flag(),
            ..AnagramParams::default()
        })
        .unwrap();

        assert_eq!(options.mode, SearchMode::Strict);
        assert!(options.include_proper);
    }

    #[test]
    fn test_scrabble_flag_selects_scrabble_mode() {
        let options = resolve_options(&AnagramParams {
            scrabble: flag(),
            ..AnagramParams::default()
        })
        .unwrap();

        assert_eq!(options.mode, SearchMode::Scrabble);
        assert!(!options.include_proper);
    }

    #[test]
    fn test_conflicting_mode_flags_are_rejected() {
        let result = resolve_options(&AnagramParams {
            proper: flag(),
            scrabble: flag(),
            ..AnagramParams::default()
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_limits_mean_unlimited() {
        for limit in [Some(0), Some(-3), None] {
            let options = resolve_options(&AnagramParams {
                limit,
                ..AnagramParams::default()
            })
            .unwrap();
            assert!(options.limit.is_none());
        }

        let options = resolve_options(&AnagramParams {
            limit: Some(5),
            ..AnagramParams::default()
        })
        .unwrap();
        assert_eq!(options.limit, Some(5));
    }

    // ============================================================
    // PROTOCOL TESTS
    // ============================================================

    #[test]
    fn test_add_words_request_deserialization() {
        let req: AddWordsRequest =
            serde_json::from_str(r#"{"words": ["read", "dear", "dare"]}"#).unwrap();

        assert_eq!(req.words, ["read", "dear", "dare"]);
    }

    #[test]
    fn test_anagrams_response_serialization() {
        let response = AnagramsResponse {
            anagrams: vec!["dare".to_string(), "dear".to_string()],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"anagrams":["dare","dear"]}"#);
    }

    #[test]
    fn test_add_words_response_round_trip() {
        let response = AddWordsResponse {
            success: true,
            added: 3,
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: AddWordsResponse = serde_json::from_str(&json).unwrap();

        assert!(restored.success);
        assert_eq!(restored.added, 3);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_add_then_query_round_trip() {
        let index = seeded_extension(&[]);

        let (status, Json(body)) = handle_add_words(
            index.clone(),
            Json(AddWordsRequest {
                words: vec!["read".into(), "dear".into(), "dare".into()],
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body.success);
        assert_eq!(body.added, 3);

        let (status, Json(body)) = query(&index, "read", AnagramParams::default()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.anagrams, ["dare", "dear"]);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_entries() {
        let index = seeded_extension(&[]);

        let (status, Json(body)) = handle_add_words(
            index,
            Json(AddWordsRequest {
                words: vec!["read".into(), "  ".into()],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_query_accepts_json_suffixed_paths() {
        let index = seeded_extension(&["read", "dear", "dare"]);

        let (status, Json(body)) = query(&index, "read.json", AnagramParams::default()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.anagrams, ["dare", "dear"]);
    }

    #[tokio::test]
    async fn test_query_with_conflicting_flags_is_bad_request() {
        let index = seeded_extension(&["read", "dear"]);

        let params = AnagramParams {
            proper: flag(),
            scrabble: flag(),
            ..AnagramParams::default()
        };
        let (status, _) = query(&index, "read", params).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_with_blank_word_is_bad_request() {
        let index = seeded_extension(&["read"]);

        let (status, _) = query(&index, "  ", AnagramParams::default()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_word_removes_only_that_word() {
        let index = seeded_extension(&["read", "dear", "dare"]);

        let status = handle_delete_word(Path("dare.json".to_string()), index.clone()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, Json(body)) = query(&index, "read", AnagramParams::default()).await;
        assert_eq!(body.anagrams, ["dear"]);
    }

    #[tokio::test]
    async fn test_delete_group_removes_all_anagrams() {
        let index = seeded_extension(&["read", "dear", "dare", "open"]);

        let status = handle_delete_group(Path("dear".to_string()), index.clone()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, Json(body)) = query(&index, "read", AnagramParams::default()).await;
        assert!(body.anagrams.is_empty());
    }

    #[tokio::test]
    async fn test_clear_corpus_empties_everything() {
        let index = seeded_extension(&["read", "dear", "dare"]);

        let status = handle_clear_corpus(index.clone()).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, Json(body)) = query(&index, "read", AnagramParams::default()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.anagrams.is_empty());
    }
}
