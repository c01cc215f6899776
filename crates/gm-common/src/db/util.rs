use std::future::Future;
use std::{sync::OnceLock, time::Instant};

use deadpool_postgres::GenericClient;
use tokio_postgres::{Error as PgError, Row, types::ToSql};
use tracing::warn;

fn slow_query_threshold_ms() -> Option<u64> {
    static CACHE: OnceLock<Option<u64>> = OnceLock::new();

    *CACHE.get_or_init(|| {
        std::env::var("GM_DB_LOG_MIN_DURATION_MS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .map(|v| v.max(0) as u64)
            .filter(|v| *v > 0)
    })
}

fn maybe_log_slow_query(label: &str, started_at: Instant) {
    if let Some(threshold_ms) = slow_query_threshold_ms() {
        let elapsed_ms = started_at.elapsed().as_millis() as u64;
        if elapsed_ms >= threshold_ms {
            warn!(query = label, elapsed_ms, "slow_query_detected");
        }
    }
}

/// Prepared-statement helpers that log queries slower than
/// `GM_DB_LOG_MIN_DURATION_MS`.
pub trait TimedClientExt: GenericClient + Sync {
    fn timed_query_cached<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [&'a (dyn ToSql + Sync)],
        label: &'a str,
    ) -> impl Future<Output = Result<Vec<Row>, PgError>> + Send + 'a {
        async move {
            let started = Instant::now();
            let prepared = self.prepare_cached(statement).await?;
            let result = self.query(&prepared, params).await;
            maybe_log_slow_query(label, started);
            result
        }
    }

    fn timed_query_opt_cached<'a>(
        &'a self,
        statement: &'a str,
        params: &'a [&'a (dyn ToSql + Sync)],
        label: &'a str,
    ) -> impl Future<Output = Result<Option<Row>, PgError>> + Send + 'a {
        async move {
            let started = Instant::now();
            let prepared = self.prepare_cached(statement).await?;
            let result = self.query_opt(&prepared, params).await;
            maybe_log_slow_query(label, started);
            result
        }
    }
}

impl<T: GenericClient + Sync + ?Sized> TimedClientExt for T {}
