use std::collections::HashSet;

use super::{clamp_unit, mean, weights::LevelFactors};
use crate::{JobDescriptor, Skill};

/// Years of experience at which the years factor saturates.
const YEARS_FOR_FULL_CREDIT: f64 = 10.0;
const LEVEL_SHARE: f64 = 0.7;
const YEARS_SHARE: f64 = 0.3;

/// Case-insensitive comparison key for skill names.
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn normalize_skill_set<'a, I>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(normalize_skill_name)
        .collect()
}

/// Normalized required-skill set of a job, built once per ranking request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredSkills(HashSet<String>);

impl RequiredSkills {
    pub fn from_job(job: &JobDescriptor) -> Self {
        Self(normalize_skill_set(
            job.required_skills.iter().map(String::as_str),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, skill_name: &str) -> bool {
        self.0.contains(&normalize_skill_name(skill_name))
    }
}

/// Share of the required skills the freelancer declares.
///
/// A job without requirements cannot penalize anyone on this axis and yields
/// full credit. Both sides use set semantics.
pub fn score_skill_coverage(required: &RequiredSkills, skills: &[Skill]) -> f64 {
    if required.is_empty() {
        return 1.0;
    }

    let owned = normalize_skill_set(skills.iter().map(|skill| skill.skill_name.as_str()));
    let overlap = required.0.intersection(&owned).count();

    clamp_unit(overlap as f64 / required.len() as f64)
}

/// Proficiency and tenure on the required skills.
///
/// Unlike coverage, an unconstrained job grants no experience credit: there
/// is nothing to be experienced in.
pub fn score_experience(
    required: &RequiredSkills,
    skills: &[Skill],
    levels: &LevelFactors,
) -> f64 {
    if required.is_empty() || skills.is_empty() {
        return 0.0;
    }

    let relevant: Vec<&Skill> = skills
        .iter()
        .filter(|skill| required.contains(&skill.skill_name))
        .collect();

    let Some(avg_level) = mean(relevant.iter().map(|skill| levels.factor(&skill.level))) else {
        return 0.0;
    };
    let avg_years = mean(relevant.iter().map(|skill| years_of(skill))).unwrap_or(0.0);
    let years_factor = clamp_unit(avg_years / YEARS_FOR_FULL_CREDIT);

    clamp_unit(LEVEL_SHARE * avg_level + YEARS_SHARE * years_factor)
}

fn years_of(skill: &Skill) -> f64 {
    skill
        .years_of_experience
        .filter(|years| years.is_finite() && *years > 0.0)
        .unwrap_or(0.0)
}
