use std::sync::Arc;

use service::aggregate::{DashboardService, HealthService};
use service::auth::TokenVerifier;
use service::clients::{AccountsClient, CatalogClient, TransactionsClient};

/// Everything a handler needs, constructed once at startup and injected into
/// the router. There is no other shared state; per-request data (claims)
/// travels in request extensions.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub catalog: CatalogClient,
    pub accounts: AccountsClient,
    pub transactions: TransactionsClient,
    pub dashboard: Arc<DashboardService>,
    pub health: Arc<HealthService>,
}
