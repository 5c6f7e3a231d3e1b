use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use models::{HealthReport, HealthStatus};
use tokio::time::timeout;
use tracing::warn;

use crate::clients::HealthProbe;

/// Composite liveness over the registered backends. Probes run concurrently,
/// each bounded by its own timeout; one backend's failure never prevents
/// probing the others.
pub struct HealthService {
    probes: Vec<Arc<dyn HealthProbe>>,
    probe_timeout: Duration,
}

impl HealthService {
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(probes: Vec<Arc<dyn HealthProbe>>) -> Self {
        Self { probes, probe_timeout: Self::DEFAULT_PROBE_TIMEOUT }
    }

    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    pub async fn check(&self) -> HealthReport {
        let checks = self.probes.iter().map(|probe| {
            let probe = Arc::clone(probe);
            let bound = self.probe_timeout;
            async move {
                let status = match timeout(bound, probe.probe()).await {
                    Ok(Ok(())) => HealthStatus::Healthy,
                    Ok(Err(e)) => {
                        warn!(service = probe.name(), error = %e, "health probe failed");
                        HealthStatus::Unhealthy
                    }
                    Err(_) => {
                        warn!(service = probe.name(), timeout = ?bound, "health probe timed out");
                        HealthStatus::Unhealthy
                    }
                };
                (probe.name(), status)
            }
        });

        let mut report = HealthReport::new();
        for (name, status) in join_all(checks).await {
            report.record(name, status);
        }
        report
    }
}
