pub mod freelancers;
pub mod jobs;
pub mod migrations;
pub mod pool;
pub mod store;
pub mod util;

pub use freelancers::fetch_freelancers_with_any_skill;
pub use jobs::fetch_job_by_id;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPoolError, PgPool, create_pool_from_url, create_pool_from_url_checked};
pub use store::{
    FreelancerStore, InMemoryMarketplaceStore, JobStore, MarketplaceStore, PgMarketplaceStore,
    StoreError,
};
