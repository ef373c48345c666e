use crate::handlers::create_env_app_state;
use crate::services::*;
use envlens_config::ExposurePolicy;
use std::sync::Arc;

fn fixture_vars() -> Vec<(String, String)> {
    [
        ("DATABASE_URL", "postgres://u:p@host/db"),
        ("NEXT_PUBLIC_X", "1"),
        ("API_KEY", "abcd1234efgh"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn fixture_snapshot() -> SnapshotService {
    SnapshotService::from_vars(fixture_vars(), &ExposurePolicy::All)
}

mod unit_tests {
    use super::*;

    #[test]
    fn categorize_is_total_over_arbitrary_keys() {
        let keys = [
            "", "a", "HOME", "DATABASE_URL", "NEXT_PUBLIC_API_KEY", "weird key!",
            "MIXED_case_Key", "PATH", "LOG_LEVEL", "X",
        ];
        for key in keys {
            let category = categorize(key);
            assert!(Category::ALL.contains(&category), "{key} fell outside the closed set");
            // Deterministic: repeated calls agree
            assert_eq!(category, categorize(key));
        }
    }

    #[test]
    fn substring_filtering_is_monotonic() {
        let snapshot = fixture_snapshot();
        // Each extension of the filter string can only shrink the result
        let filters = ["", "A", "AP", "API", "API_", "API_K", "API_KEY_EXTRA"];
        let mut previous_len = usize::MAX;
        for filter in filters {
            let visible =
                filter_entries(snapshot.entries(), filter, FilterMode::Substring, None);
            assert!(visible.len() <= previous_len, "filter {filter:?} grew the result");
            previous_len = visible.len();
        }
    }

    #[test]
    fn empty_filter_preserves_sorted_order() {
        let snapshot = fixture_snapshot();
        let visible = filter_entries(snapshot.entries(), "", FilterMode::Substring, None);
        let keys: Vec<&str> = visible.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["API_KEY", "DATABASE_URL", "NEXT_PUBLIC_X"]);
    }

    #[test]
    fn spec_example_scenario() {
        let snapshot = fixture_snapshot();
        let visible = filter_entries(snapshot.entries(), "", FilterMode::Substring, None);
        assert_eq!(visible.len(), 3);

        let categories: Vec<Category> = visible.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::ApiKeys, Category::Database, Category::NextPublic]
        );

        let api_key = visible.iter().find(|e| e.key == "API_KEY").unwrap();
        assert_eq!(
            mask_value(&api_key.value, api_key.is_secret, false),
            "abcd••••••••efgh"
        );
    }

    #[test]
    fn export_round_trip_over_snapshot() {
        let snapshot = fixture_snapshot();
        let visible = filter_entries(snapshot.entries(), "", FilterMode::Substring, None);
        let payload = render_export(&visible);

        let mut recovered: Vec<(String, String)> = payload
            .lines()
            .map(|line| {
                let (key, encoded) = line.split_once('=').unwrap();
                (key.to_string(), serde_json::from_str(encoded).unwrap())
            })
            .collect();
        recovered.sort();

        let mut original = fixture_vars();
        original.sort();
        assert_eq!(recovered, original);
    }
}

mod handler_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> axum::Router {
        let state = create_env_app_state(Arc::new(fixture_snapshot()));
        crate::configure_routes().with_state(state)
    }

    async fn get_json(uri: &str) -> serde_json::Value {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn variables_endpoint_masks_secrets_by_default() {
        let body = get_json("/env/variables").await;

        assert_eq!(body["total"], 3);
        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 3);

        let api_key = entries.iter().find(|e| e["key"] == "API_KEY").unwrap();
        assert_eq!(api_key["value"], "abcd••••••••efgh");
        assert_eq!(api_key["category"], "api-keys");
        assert_eq!(api_key["is_secret"], true);
    }

    #[tokio::test]
    async fn show_secrets_reveals_values() {
        let body = get_json("/env/variables?show_secrets=true").await;

        let entries = body["entries"].as_array().unwrap();
        let api_key = entries.iter().find(|e| e["key"] == "API_KEY").unwrap();
        assert_eq!(api_key["value"], "abcd1234efgh");
    }

    #[tokio::test]
    async fn category_restriction_narrows_the_view() {
        let body = get_json("/env/variables?category=database").await;

        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["key"], "DATABASE_URL");
        // Stats still cover the whole snapshot
        assert_eq!(body["total"], 3);
        assert_eq!(body["stats"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn malformed_query_answers_problem_json() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/env/variables?category=not-a-category")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }

    #[tokio::test]
    async fn invalid_regex_yields_empty_view_not_an_error() {
        let body = get_json("/env/variables?mode=regex&filter=%5Bunterminated").await;

        assert_eq!(body["entries"].as_array().unwrap().len(), 0);
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn export_sets_filename_for_active_category() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/env/export?category=database")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("env-variables-database.txt"));

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"DATABASE_URL="postgres://u:p@host/db""#
        );
    }

    #[tokio::test]
    async fn export_exposes_raw_values() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/env/export?category=api-keys")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        // Raw value, not the masked rendering
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"API_KEY="abcd1234efgh""#
        );
    }

    #[tokio::test]
    async fn empty_export_answers_no_content() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/env/export?filter=no-such-variable")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
