use std::time::Instant;

use metrics::{counter, histogram};
use tracing::{debug, info, instrument};

use super::ranking::{DEFAULT_MATCH_LIMIT, TopMatch, rank_top_matches};
use super::scoring::MatchingConfig;
use crate::db::{FreelancerStore, JobStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopMatchesQuery {
    pub job_id: String,
    pub limit: usize,
}

impl TopMatchesQuery {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            limit: DEFAULT_MATCH_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Fetch the job and the candidate population once each, then rank.
///
/// An unknown job is not a fault: it yields an empty list and the freelancer
/// store is never queried. Store failures propagate untouched.
#[instrument(skip_all, fields(job_id = %query.job_id, limit = query.limit))]
pub async fn get_top_matches<J, F>(
    jobs: &J,
    freelancers: &F,
    query: &TopMatchesQuery,
    config: MatchingConfig,
) -> Result<Vec<TopMatch>, StoreError>
where
    J: JobStore + Sync,
    F: FreelancerStore + Sync,
{
    let started = Instant::now();

    let Some(job) = jobs.find_job(&query.job_id).await? else {
        debug!("job not found; returning no matches");
        counter!("gm_match_requests_total", "outcome" => "job_missing").increment(1);
        return Ok(Vec::new());
    };

    let population = freelancers.find_freelancers_with_any_skill().await?;
    let candidates = population.len();

    let matches = rank_top_matches(&job, population, query.limit, config);

    let elapsed = started.elapsed();
    counter!("gm_match_requests_total", "outcome" => "ranked").increment(1);
    histogram!("gm_match_candidates").record(candidates as f64);
    histogram!("gm_match_duration_seconds").record(elapsed.as_secs_f64());

    info!(
        candidates,
        returned = matches.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "ranked freelancers for job"
    );

    Ok(matches)
}
