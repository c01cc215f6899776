use axum::{
    Json,
    extract::{Path, Query, State},
};
use tokio::time::timeout;

use gm_common::api::match_request::MatchQuery;
use gm_common::api::match_response::MatchResponse;
use gm_common::matching::{TopMatchesQuery, get_top_matches};

use crate::SharedState;
use crate::error::ApiError;
use crate::handlers::pagination::resolve_limit;

/// `GET /api/jobs/:job_id/matches?limit=N`
///
/// Unknown jobs answer `200 []`; the timeout covers fetch, scoring and sort.
pub async fn list_matches(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let limit = resolve_limit(
        query.limit,
        state.config.default_limit,
        state.config.max_limit,
    )?;
    let request = TopMatchesQuery::new(job_id).with_limit(limit);

    let matches = timeout(
        state.config.match_timeout,
        get_top_matches(&state.store, &state.store, &request, state.match_config),
    )
    .await
    .map_err(|_| ApiError::Timeout(format!("ranking job {} timed out", request.job_id)))??;

    Ok(Json(matches.into_iter().map(MatchResponse::from).collect()))
}
