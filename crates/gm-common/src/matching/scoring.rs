use super::{
    clamp_unit,
    portfolio::score_portfolio,
    reviews::score_reviews,
    skills::{RequiredSkills, score_experience, score_skill_coverage},
    to_percent,
    weights::{LEVEL_FACTORS, LevelFactors, MATCH_WEIGHTS, Weights},
};
use crate::{FreelancerDescriptor, JobDescriptor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingConfig {
    pub weights: Weights,
    pub level_factors: LevelFactors,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MATCH_WEIGHTS,
            level_factors: LEVEL_FACTORS,
        }
    }
}

/// Factor scores in the unit interval, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skills: f64,
    pub experience: f64,
    pub portfolio: f64,
    pub reviews: f64,
}

impl ComponentScores {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        clamp_unit(
            weights.skills * self.skills
                + weights.experience * self.experience
                + weights.portfolio * self.portfolio
                + weights.reviews * self.reviews,
        )
    }
}

/// Per-factor scores on the 0-100 scale, two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub portfolio: f64,
    pub reviews: f64,
}

impl From<&ComponentScores> for ScoreBreakdown {
    fn from(value: &ComponentScores) -> Self {
        Self {
            skills: to_percent(value.skills),
            experience: to_percent(value.experience),
            portfolio: to_percent(value.portfolio),
            reviews: to_percent(value.reviews),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub freelancer_id: String,
    /// 0-100, two decimals.
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores freelancers against one job. The job's required-skill set is
/// normalized once at construction and reused for every candidate.
pub struct MatchScorer {
    config: MatchingConfig,
    required: RequiredSkills,
}

impl MatchScorer {
    pub fn new(job: &JobDescriptor, config: MatchingConfig) -> Self {
        Self {
            config,
            required: RequiredSkills::from_job(job),
        }
    }

    pub fn components(&self, freelancer: &FreelancerDescriptor) -> ComponentScores {
        ComponentScores {
            skills: score_skill_coverage(&self.required, &freelancer.skills),
            experience: score_experience(
                &self.required,
                &freelancer.skills,
                &self.config.level_factors,
            ),
            portfolio: score_portfolio(&freelancer.portfolio),
            reviews: score_reviews(&freelancer.reviews),
        }
    }

    pub fn score(&self, freelancer: &FreelancerDescriptor) -> MatchResult {
        let components = self.components(freelancer);
        let total = components.weighted_total(&self.config.weights);

        MatchResult {
            freelancer_id: freelancer.id.clone(),
            total_score: to_percent(total),
            breakdown: ScoreBreakdown::from(&components),
        }
    }
}

pub fn score_freelancer_for_job(
    job: &JobDescriptor,
    freelancer: &FreelancerDescriptor,
) -> MatchResult {
    MatchScorer::new(job, MatchingConfig::default()).score(freelancer)
}
