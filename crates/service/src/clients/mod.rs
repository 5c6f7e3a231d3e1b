//! Transport adapters for the three backend services. Each adapter wraps its
//! protocol client with a retry/backoff policy and normalizes failures into
//! [`common::ServiceError`] before anything upstream sees them.

pub mod accounts;
pub mod catalog;
pub(crate) mod http;
pub mod proto;
pub mod retry;
pub mod transactions;

pub use accounts::AccountsClient;
pub use catalog::CatalogClient;
pub use retry::{Backoff, RetryPolicy};
pub use transactions::TransactionsClient;

use async_trait::async_trait;
use common::ServiceCallResult;

/// A single-attempt liveness check against one backend. Probes never retry;
/// the health aggregator bounds each one with its own timeout instead.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Service name as reported in the health view.
    fn name(&self) -> &'static str;

    async fn probe(&self) -> ServiceCallResult<()>;
}
