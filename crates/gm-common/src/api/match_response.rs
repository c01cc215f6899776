use serde::{Deserialize, Serialize};

use crate::FreelancerDescriptor;
use crate::matching::{ScoreBreakdown, TopMatch};

/// One ranked candidate as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub freelancer: FreelancerDescriptor,
    pub score: ScorePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePayload {
    /// Weighted composite, 0-100.
    pub total: f64,
    pub breakdown: BreakdownPayload,
}

/// Factor scores, each 0-100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownPayload {
    pub skills: f64,
    pub experience: f64,
    pub portfolio: f64,
    pub reviews: f64,
}

impl From<&ScoreBreakdown> for BreakdownPayload {
    fn from(value: &ScoreBreakdown) -> Self {
        Self {
            skills: value.skills,
            experience: value.experience,
            portfolio: value.portfolio,
            reviews: value.reviews,
        }
    }
}

impl From<TopMatch> for MatchResponse {
    fn from(value: TopMatch) -> Self {
        Self {
            score: ScorePayload {
                total: value.score.total_score,
                breakdown: BreakdownPayload::from(&value.score.breakdown),
            },
            freelancer: value.freelancer,
        }
    }
}
