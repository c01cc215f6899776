use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::FreelancerDescriptor;
use crate::db::PgPool;
use crate::db::store::StoreError;
use crate::db::util::TimedClientExt;

const FREELANCERS_WITH_ANY_SKILL_SQL: &str = "SELECT id, username, full_name, profile_image, \
            skills, portfolio, reviews \
     FROM market.freelancers \
     WHERE jsonb_typeof(skills) = 'array' AND jsonb_array_length(skills) > 0";

/// Decode a JSONB list column entry by entry. Entries that are not objects
/// are skipped with a warning and the rest of the list is kept, so one bad
/// entry cannot drop a freelancer from the population.
fn parse_json_list<T: DeserializeOwned>(value: Option<Value>, column: &str, id: &str) -> Vec<T> {
    let entries = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            warn!(freelancer_id = id, column, "json column is not an array; ignoring");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            serde_json::from_value(entry)
                .map_err(|err| {
                    warn!(
                        freelancer_id = id,
                        column,
                        index,
                        error = %err,
                        "discarding malformed json entry"
                    );
                })
                .ok()
        })
        .collect()
}

/// Single bulk read of every freelancer declaring at least one skill.
#[instrument(skip(pool))]
pub async fn fetch_freelancers_with_any_skill(
    pool: &PgPool,
) -> Result<Vec<FreelancerDescriptor>, StoreError> {
    let client = pool.get().await?;

    let rows = client
        .timed_query_cached(
            FREELANCERS_WITH_ANY_SKILL_SQL,
            &[],
            "fetch_freelancers_with_any_skill",
        )
        .await?;

    let freelancers: Vec<FreelancerDescriptor> = rows
        .into_iter()
        .map(|row| {
            let id: String = row.get("id");
            FreelancerDescriptor {
                skills: parse_json_list(row.get("skills"), "skills", &id),
                portfolio: parse_json_list(row.get("portfolio"), "portfolio", &id),
                reviews: parse_json_list(row.get("reviews"), "reviews", &id),
                username: row.get("username"),
                full_name: row.get("full_name"),
                profile_image: row.get("profile_image"),
                id,
            }
        })
        .collect();

    debug!(count = freelancers.len(), "loaded freelancer population");
    Ok(freelancers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::rank_freelancers;
    use crate::matching::reviews::score_reviews;
    use crate::{JobDescriptor, ProficiencyLevel, Review, Skill};
    use serde_json::json;

    #[test]
    fn parses_well_formed_columns() {
        let skills: Vec<Skill> = parse_json_list(
            Some(json!([{ "skillName": "React", "level": "ADVANCED", "yearsOfExperience": 2 }])),
            "skills",
            "f-1",
        );

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].level, ProficiencyLevel::Advanced);
    }

    #[test]
    fn malformed_or_null_columns_become_empty() {
        let reviews: Vec<Review> =
            parse_json_list(Some(json!({ "rating": 5 })), "reviews", "f-1");
        assert!(reviews.is_empty());

        let reviews: Vec<Review> = parse_json_list(Some(Value::Null), "reviews", "f-1");
        assert!(reviews.is_empty());

        let reviews: Vec<Review> = parse_json_list(None, "reviews", "f-1");
        assert!(reviews.is_empty());
    }

    #[test]
    fn mistyped_skill_fields_keep_the_list() {
        let skills: Vec<Skill> = parse_json_list(
            Some(json!([
                { "skillName": "React", "level": "EXPERT", "yearsOfExperience": 5 },
                { "skillName": "Node.js", "level": "EXPERT", "yearsOfExperience": "3" },
                { "skillName": null, "level": "BEGINNER" }
            ])),
            "skills",
            "f-1",
        );

        assert_eq!(skills.len(), 3);
        assert_eq!(skills[1].skill_name, "Node.js");
        assert_eq!(skills[1].years_of_experience, None);
        assert_eq!(skills[2].skill_name, "");

        let freelancer = FreelancerDescriptor {
            id: "f-1".into(),
            skills,
            ..Default::default()
        };
        let job = JobDescriptor {
            id: "job-1".into(),
            title: None,
            required_skills: vec!["React".into()],
        };
        let ranked = rank_freelancers(&job, &[freelancer], 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].breakdown.skills, 100.0);
    }

    #[test]
    fn mistyped_ratings_count_as_zero() {
        let reviews: Vec<Review> = parse_json_list(
            Some(json!([{ "rating": 5 }, { "rating": "4" }])),
            "reviews",
            "f-1",
        );

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, Some(5.0));
        assert_eq!(reviews[1].rating, None);
        assert_eq!(score_reviews(&reviews), 0.5);
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let skills: Vec<Skill> = parse_json_list(
            Some(json!(["React", { "skillName": "Rust", "level": "ADVANCED" }])),
            "skills",
            "f-1",
        );

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].skill_name, "Rust");
    }
}
