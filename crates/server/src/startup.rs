use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use configs::AppConfig;
use dotenvy::dotenv;
use service::aggregate::{DashboardService, HealthService};
use service::auth::TokenVerifier;
use service::clients::{
    AccountsClient, CatalogClient, HealthProbe, RetryPolicy, TransactionsClient,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the long-lived clients and aggregators from validated config.
/// Everything here is built exactly once and injected; handlers share these
/// instances read-only.
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let secret = cfg.decoded_secret()?;
    let verifier = Arc::new(TokenVerifier::new(&secret));

    let http = reqwest::Client::new();
    let catalog = CatalogClient::new(cfg.backends.catalog_addr.clone(), RetryPolicy::rpc_default())?;
    let accounts = AccountsClient::new(
        http.clone(),
        cfg.backends.accounts_base_url.clone(),
        RetryPolicy::http_default(),
    );
    let transactions = TransactionsClient::new(
        http,
        cfg.backends.transactions_base_url.clone(),
        RetryPolicy::http_default(),
    );

    let dashboard = Arc::new(DashboardService::new(
        accounts.clone(),
        catalog.clone(),
        transactions.clone(),
    ));
    let health = Arc::new(HealthService::new(vec![
        Arc::new(catalog.clone()) as Arc<dyn HealthProbe>,
        Arc::new(accounts.clone()),
        Arc::new(transactions.clone()),
    ]));

    Ok(AppState { verifier, catalog, accounts, transactions, dashboard, health })
}

/// Public entry: load config, build the app, and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_and_validate()?;
    let state = build_state(&cfg)?;
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting aggregation gateway");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
