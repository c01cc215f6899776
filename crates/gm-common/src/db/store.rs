use std::future::Future;

use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;

use crate::db::PgPool;
use crate::db::freelancers::fetch_freelancers_with_any_skill;
use crate::db::jobs::fetch_job_by_id;
use crate::{FreelancerDescriptor, JobDescriptor};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait JobStore {
    fn find_job(
        &self,
        job_id: &str,
    ) -> impl Future<Output = Result<Option<JobDescriptor>, StoreError>> + Send;
}

pub trait FreelancerStore {
    /// Every freelancer with at least one skill entry, in one read.
    fn find_freelancers_with_any_skill(
        &self,
    ) -> impl Future<Output = Result<Vec<FreelancerDescriptor>, StoreError>> + Send;
}

#[derive(Clone)]
pub struct PgMarketplaceStore {
    pool: PgPool,
}

impl PgMarketplaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl JobStore for PgMarketplaceStore {
    async fn find_job(&self, job_id: &str) -> Result<Option<JobDescriptor>, StoreError> {
        fetch_job_by_id(&self.pool, job_id).await
    }
}

impl FreelancerStore for PgMarketplaceStore {
    async fn find_freelancers_with_any_skill(
        &self,
    ) -> Result<Vec<FreelancerDescriptor>, StoreError> {
        fetch_freelancers_with_any_skill(&self.pool).await
    }
}

/// Vector-backed store for tests and local demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketplaceStore {
    pub jobs: Vec<JobDescriptor>,
    pub freelancers: Vec<FreelancerDescriptor>,
}

impl InMemoryMarketplaceStore {
    pub fn new(jobs: Vec<JobDescriptor>, freelancers: Vec<FreelancerDescriptor>) -> Self {
        Self { jobs, freelancers }
    }
}

impl JobStore for InMemoryMarketplaceStore {
    async fn find_job(&self, job_id: &str) -> Result<Option<JobDescriptor>, StoreError> {
        Ok(self.jobs.iter().find(|job| job.id == job_id).cloned())
    }
}

impl FreelancerStore for InMemoryMarketplaceStore {
    async fn find_freelancers_with_any_skill(
        &self,
    ) -> Result<Vec<FreelancerDescriptor>, StoreError> {
        Ok(self
            .freelancers
            .iter()
            .filter(|freelancer| freelancer.is_matchable())
            .cloned()
            .collect())
    }
}

/// The store backing a running service.
#[derive(Clone)]
pub enum MarketplaceStore {
    Postgres(PgMarketplaceStore),
    InMemory(InMemoryMarketplaceStore),
}

impl JobStore for MarketplaceStore {
    async fn find_job(&self, job_id: &str) -> Result<Option<JobDescriptor>, StoreError> {
        match self {
            MarketplaceStore::Postgres(store) => store.find_job(job_id).await,
            MarketplaceStore::InMemory(store) => store.find_job(job_id).await,
        }
    }
}

impl FreelancerStore for MarketplaceStore {
    async fn find_freelancers_with_any_skill(
        &self,
    ) -> Result<Vec<FreelancerDescriptor>, StoreError> {
        match self {
            MarketplaceStore::Postgres(store) => store.find_freelancers_with_any_skill().await,
            MarketplaceStore::InMemory(store) => store.find_freelancers_with_any_skill().await,
        }
    }
}
