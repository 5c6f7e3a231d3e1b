//! Request aggregators: the fan-out/merge logic composed from the transport
//! adapters. Dashboard merges fail-fast; health checking is best-effort by
//! design.

pub mod dashboard;
pub mod health;

pub use dashboard::{DashboardError, DashboardService};
pub use health::HealthService;
