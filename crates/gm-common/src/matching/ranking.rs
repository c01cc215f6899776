use std::cmp::Ordering;

use super::scoring::{MatchResult, MatchScorer, MatchingConfig};
use crate::{FreelancerDescriptor, JobDescriptor};

pub const DEFAULT_MATCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TopMatch {
    pub freelancer: FreelancerDescriptor,
    pub score: MatchResult,
}

/// Highest total first; equal totals fall back to freelancer id ascending so
/// the order never depends on how the store returned the rows.
fn by_rank(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| a.freelancer_id.cmp(&b.freelancer_id))
}

/// Score every matchable freelancer and keep the best `limit`.
///
/// Freelancers without any skill entry are not candidates at all; they are
/// dropped before scoring rather than ranked with a zero.
pub fn rank_freelancers(
    job: &JobDescriptor,
    freelancers: &[FreelancerDescriptor],
    limit: usize,
) -> Vec<MatchResult> {
    rank_freelancers_with_config(job, freelancers, limit, MatchingConfig::default())
}

pub fn rank_freelancers_with_config(
    job: &JobDescriptor,
    freelancers: &[FreelancerDescriptor],
    limit: usize,
    config: MatchingConfig,
) -> Vec<MatchResult> {
    let scorer = MatchScorer::new(job, config);

    let mut ranked: Vec<MatchResult> = freelancers
        .iter()
        .filter(|freelancer| freelancer.is_matchable())
        .map(|freelancer| scorer.score(freelancer))
        .collect();

    ranked.sort_by(by_rank);
    ranked.truncate(limit);
    ranked
}

/// Same ranking as [`rank_freelancers`], keeping each freelancer record next
/// to its score for the response payload.
pub fn rank_top_matches(
    job: &JobDescriptor,
    freelancers: Vec<FreelancerDescriptor>,
    limit: usize,
    config: MatchingConfig,
) -> Vec<TopMatch> {
    let scorer = MatchScorer::new(job, config);

    let mut ranked: Vec<TopMatch> = freelancers
        .into_iter()
        .filter(FreelancerDescriptor::is_matchable)
        .map(|freelancer| TopMatch {
            score: scorer.score(&freelancer),
            freelancer,
        })
        .collect();

    ranked.sort_by(|a, b| by_rank(&a.score, &b.score));
    ranked.truncate(limit);
    ranked
}
