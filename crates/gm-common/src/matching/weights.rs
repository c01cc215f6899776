use crate::ProficiencyLevel;

/// Composite weights for the four match factors.
/// Skill coverage dominates; review quality is the tie-breaking signal.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.25,
    portfolio: 0.20,
    reviews: 0.15,
};

/// Credit granted per declared proficiency level.
pub const LEVEL_FACTORS: LevelFactors = LevelFactors {
    beginner: 0.25,
    intermediate: 0.5,
    advanced: 0.8,
    expert: 1.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub portfolio: f64,
    pub reviews: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.portfolio + self.reviews
    }
}

impl Default for Weights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelFactors {
    pub beginner: f64,
    pub intermediate: f64,
    pub advanced: f64,
    pub expert: f64,
}

impl LevelFactors {
    pub fn factor(&self, level: &ProficiencyLevel) -> f64 {
        match level {
            ProficiencyLevel::Beginner => self.beginner,
            ProficiencyLevel::Intermediate => self.intermediate,
            ProficiencyLevel::Advanced => self.advanced,
            ProficiencyLevel::Expert => self.expert,
            ProficiencyLevel::Unrecognized(_) => 0.0,
        }
    }
}

impl Default for LevelFactors {
    fn default() -> Self {
        LEVEL_FACTORS
    }
}
