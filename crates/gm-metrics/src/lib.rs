use std::env;
use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Port for the exporter: `port_env` when it holds a valid non-zero port,
/// `default_port` otherwise.
pub fn resolve_metrics_port(raw: Option<&str>, default_port: u16) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port > 0)
        .unwrap_or(default_port)
}

/// Install the global Prometheus recorder and serve `/metrics` on
/// `0.0.0.0:<port>`. Later calls return the handle from the first one.
///
/// Must run inside a tokio runtime; the HTTP listener is spawned on it.
pub fn init_metrics(port_env: &str, default_port: u16) -> Option<&'static PrometheusHandle> {
    if let Some(existing) = PROMETHEUS_HANDLE.get() {
        return Some(existing);
    }

    let port = resolve_metrics_port(env::var(port_env).ok().as_deref(), default_port);

    let (recorder, exporter) = match PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .build()
    {
        Ok(parts) => parts,
        Err(err) => {
            warn!(error = %err, metrics_port = port, "failed to build prometheus exporter");
            return None;
        }
    };

    let handle = recorder.handle();
    if let Err(err) = metrics::set_global_recorder(recorder) {
        warn!(error = %err, "metrics recorder already installed");
        return None;
    }

    tokio::spawn(async move {
        // `ExporterError` implements neither `Debug` nor `Display` in 0.15.
        if exporter.await.is_err() {
            warn!("prometheus exporter stopped");
        }
    });

    let _ = PROMETHEUS_HANDLE.set(handle);
    info!(metrics_port = port, "started prometheus exporter");

    PROMETHEUS_HANDLE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_port() {
        assert_eq!(resolve_metrics_port(None, 9102), 9102);
        assert_eq!(resolve_metrics_port(Some("not-a-port"), 9102), 9102);
        assert_eq!(resolve_metrics_port(Some("0"), 9102), 9102);
    }

    #[test]
    fn honours_configured_port() {
        assert_eq!(resolve_metrics_port(Some(" 9300 "), 9102), 9300);
    }
}
