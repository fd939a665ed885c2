//! `GET /api/medals`

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use super::ServerState;

/// Error body returned with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn internal_error(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: message.into(),
        }),
    )
}

/// GET /api/medals
///
/// Returns the stored records after an artificial delay. Fails at random
/// according to the configured failure rate.
pub async fn get_medals(State(state): State<ServerState>) -> ApiResult<Vec<Value>> {
    let delay = state.faults.latency();
    tokio::time::sleep(delay).await;

    if state.faults.should_fail() {
        warn!("injecting simulated server error");
        return Err(internal_error("Internal server error"));
    }

    let records = state.store.load().await.map_err(|e| {
        error!(error = %e, "failed to load medal data");
        internal_error(format!("Failed to fetch medal data: {}", e))
    })?;

    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{build_router, FaultInjection};
    use crate::server::store::MedalStore;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use std::path::Path;
    use tower::ServiceExt;

    fn bundled_store() -> MedalStore {
        MedalStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("public/medals.json"))
    }

    async fn get(state: ServerState) -> (StatusCode, Option<String>, Value) {
        let resp = build_router(state)
            .oneshot(Request::builder().uri("/api/medals").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_returns_medal_array() {
        let (status, content_type, body) =
            get(ServerState::new(bundled_store(), FaultInjection::none())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().contains("application/json"));

        let records = body.as_array().unwrap();
        assert!(!records.is_empty());
        for record in records {
            let mut keys: Vec<&str> = record.as_object().unwrap().keys().map(|k| k.as_str()).collect();
            keys.sort();
            assert_eq!(keys, vec!["bronze", "code", "gold", "silver"]);
        }
    }

    #[tokio::test]
    async fn test_codes_and_counts_are_valid() {
        let (_, _, body) = get(ServerState::new(bundled_store(), FaultInjection::none())).await;

        let records = body.as_array().unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r["code"].as_str().unwrap()).collect();
        for code in &codes {
            assert_eq!(code.len(), 3);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()));
        }
        for expected in ["USA", "RUS", "NOR"] {
            assert!(codes.contains(&expected));
        }
        for record in records {
            for field in ["gold", "silver", "bronze"] {
                assert!(record[field].as_u64().is_some());
            }
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_server_error() {
        let state = ServerState::new(MedalStore::new("/nonexistent/medals.json"), FaultInjection::none());
        let (status, _, body) = get(state).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to fetch medal data"));
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let faults = FaultInjection::new(std::time::Duration::ZERO, std::time::Duration::ZERO, 1.0);
        let (status, _, body) = get(ServerState::new(bundled_store(), faults)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
