use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Composite liveness over all probed backends. `status` is healthy only
/// while every recorded service is healthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub services: BTreeMap<String, HealthStatus>,
}

impl HealthReport {
    pub fn new() -> Self {
        Self { status: HealthStatus::Healthy, services: BTreeMap::new() }
    }

    pub fn record(&mut self, service: impl Into<String>, status: HealthStatus) {
        if status == HealthStatus::Unhealthy {
            self.status = HealthStatus::Unhealthy;
        }
        self.services.insert(service.into(), status);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

impl Default for HealthReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unhealthy_service_flips_overall() {
        let mut report = HealthReport::new();
        report.record("book-service", HealthStatus::Healthy);
        report.record("user-service", HealthStatus::Unhealthy);
        report.record("transaction-service", HealthStatus::Healthy);
        assert!(!report.is_healthy());
        assert_eq!(report.services["book-service"], HealthStatus::Healthy);
    }

    #[test]
    fn statuses_serialize_lowercase() {
        let mut report = HealthReport::new();
        report.record("book-service", HealthStatus::Healthy);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["services"]["book-service"], "healthy");
    }
}
