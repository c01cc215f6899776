pub mod api;
pub mod db;
pub mod logging;
pub mod matching;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use strum::{AsRefStr, EnumString};

// Records handed to the matching engine by the stores. Field names follow the
// upstream JSON documents (camelCase).

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Declared proficiency on a skill entry.
///
/// Anything that is not one of the four upstream labels (including a missing
/// or non-string value) deserializes to `Unrecognized`, which carries no
/// level credit during scoring. The stored value is kept so it serializes
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[strum(disabled)]
    Unrecognized(Value),
}

impl Default for ProficiencyLevel {
    fn default() -> Self {
        ProficiencyLevel::Unrecognized(Value::Null)
    }
}

impl ProficiencyLevel {
    pub fn from_label(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| ProficiencyLevel::Unrecognized(Value::String(label.to_owned())))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ProficiencyLevel::Unrecognized(_))
    }

    fn is_missing(&self) -> bool {
        matches!(self, ProficiencyLevel::Unrecognized(Value::Null))
    }
}

impl Serialize for ProficiencyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProficiencyLevel::Unrecognized(raw) => raw.serialize(serializer),
            known => serializer.serialize_str(known.as_ref()),
        }
    }
}

impl<'de> Deserialize<'de> for ProficiencyLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(label)) => ProficiencyLevel::from_label(&label),
            Some(other) => ProficiencyLevel::Unrecognized(other),
            None => ProficiencyLevel::default(),
        })
    }
}

// Stored documents are loosely typed. Field decoders below never fail: a
// value of the wrong JSON type reads as absent.

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_f64))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient_string")]
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "ProficiencyLevel::is_missing")]
    pub level: ProficiencyLevel,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub years_of_experience: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl PortfolioItem {
    pub fn image_count(&self) -> usize {
        self.image_urls.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerDescriptor {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl FreelancerDescriptor {
    /// Only freelancers with at least one skill entry take part in matching.
    pub fn is_matchable(&self) -> bool {
        !self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_deserialize_permissively() {
        let skills: Vec<Skill> = serde_json::from_value(serde_json::json!([
            { "skillName": "Rust", "level": "EXPERT", "yearsOfExperience": 4 },
            { "skillName": "Go", "level": "GURU" },
            { "skillName": "SQL", "level": null },
            { "skillName": "CSS", "level": 3 },
            { "skillName": "Figma" }
        ]))
        .unwrap();

        assert_eq!(skills[0].level, ProficiencyLevel::Expert);
        assert_eq!(skills[0].years_of_experience, Some(4.0));
        assert!(skills[1..].iter().all(|skill| !skill.level.is_recognized()));
        assert_eq!(skills[4].years_of_experience, None);
    }

    #[test]
    fn unrecognized_levels_serialize_as_stored() {
        let skills: Vec<Skill> = serde_json::from_value(serde_json::json!([
            { "skillName": "Go", "level": "GURU" },
            { "skillName": "CSS", "level": 3 },
            { "skillName": "Figma" }
        ]))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&skills).unwrap(),
            serde_json::json!([
                { "skillName": "Go", "level": "GURU", "yearsOfExperience": null },
                { "skillName": "CSS", "level": 3, "yearsOfExperience": null },
                { "skillName": "Figma", "yearsOfExperience": null }
            ])
        );
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let skill: Skill = serde_json::from_value(serde_json::json!({
            "skillName": null, "level": "EXPERT", "yearsOfExperience": "3"
        }))
        .unwrap();
        assert_eq!(skill.skill_name, "");
        assert_eq!(skill.level, ProficiencyLevel::Expert);
        assert_eq!(skill.years_of_experience, None);

        let review: Review = serde_json::from_value(serde_json::json!({ "rating": "4" })).unwrap();
        assert_eq!(review.rating, None);

        let item: PortfolioItem = serde_json::from_value(serde_json::json!({
            "title": 7, "description": ["x"]
        }))
        .unwrap();
        assert_eq!(item, PortfolioItem::default());
    }

    #[test]
    fn level_labels_are_case_sensitive() {
        assert_eq!(
            ProficiencyLevel::from_label("INTERMEDIATE"),
            ProficiencyLevel::Intermediate
        );
        assert_eq!(
            ProficiencyLevel::from_label("intermediate"),
            ProficiencyLevel::Unrecognized(Value::String("intermediate".into()))
        );
        assert!(!ProficiencyLevel::from_label("UNRECOGNIZED").is_recognized());
        assert_eq!(ProficiencyLevel::Advanced.as_ref(), "ADVANCED");
    }

    #[test]
    fn freelancer_document_defaults_missing_lists() {
        let freelancer: FreelancerDescriptor = serde_json::from_value(serde_json::json!({
            "id": "f-1",
            "fullName": "Ada Lovelace",
            "portfolio": [{ "description": "Analytical engine", "imageUrls": ["a.png", "b.png"] }]
        }))
        .unwrap();

        assert!(!freelancer.is_matchable());
        assert!(freelancer.reviews.is_empty());
        assert_eq!(freelancer.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(freelancer.portfolio[0].image_count(), 2);
    }
}
