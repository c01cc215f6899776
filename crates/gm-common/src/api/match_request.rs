use serde::Deserialize;

/// Query string of `GET /jobs/{job_id}/matches`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}
