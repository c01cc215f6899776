use tracing::instrument;

use crate::JobDescriptor;
use crate::db::PgPool;
use crate::db::store::StoreError;
use crate::db::util::TimedClientExt;

const FIND_JOB_SQL: &str = "SELECT id, title, required_skills \
     FROM market.job_postings \
     WHERE id = $1";

#[instrument(skip(pool))]
pub async fn fetch_job_by_id(
    pool: &PgPool,
    job_id: &str,
) -> Result<Option<JobDescriptor>, StoreError> {
    let client = pool.get().await?;

    let row = client
        .timed_query_opt_cached(FIND_JOB_SQL, &[&job_id], "fetch_job_by_id")
        .await?;

    Ok(row.map(|row| JobDescriptor {
        id: row.get("id"),
        title: row.get("title"),
        required_skills: row
            .get::<_, Option<Vec<String>>>("required_skills")
            .unwrap_or_default(),
    }))
}
