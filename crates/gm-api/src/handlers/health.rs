use axum::{Json, extract::State};
use serde_json::json;
use tokio::time::{Duration, timeout};

use gm_common::db::MarketplaceStore;

use crate::SharedState;
use crate::error::ApiError;

const READINESS_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    let MarketplaceStore::Postgres(store) = &state.store else {
        return Ok(Json(json!({
            "status": "ok",
            "database": "in_memory",
            "application": env!("CARGO_PKG_NAME"),
        })));
    };

    let client = timeout(READINESS_TIMEOUT, store.pool().get())
        .await
        .map_err(|_| ApiError::ServiceUnavailable("db_pool_timeout".into()))
        .and_then(|result| {
            result.map_err(|err| {
                ApiError::ServiceUnavailable(format!("failed to check out pool connection: {err}"))
            })
        })?;

    timeout(READINESS_TIMEOUT, client.simple_query("SELECT 1"))
        .await
        .map_err(|_| ApiError::ServiceUnavailable("db_ping_timeout".into()))
        .and_then(|result| {
            result
                .map_err(|err| ApiError::ServiceUnavailable(format!("health check failed: {err}")))
        })?;

    Ok(Json(json!({
        "status": "ok",
        "database": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_common::db::InMemoryMarketplaceStore;

    #[tokio::test]
    async fn readyz_rejects_when_readiness_disabled() {
        let state = crate::test_state(InMemoryMarketplaceStore::default());
        state
            .readiness
            .store(false, std::sync::atomic::Ordering::SeqCst);

        let result = readyz(State(state)).await;

        match result {
            Err(ApiError::ServiceUnavailable(code)) => {
                assert!(code.contains("shutting_down"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn readyz_skips_database_for_in_memory_store() {
        let state = crate::test_state(InMemoryMarketplaceStore::default());

        let Json(body) = readyz(State(state)).await.unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "in_memory");
    }
}
