use common::ServiceError;
use models::DashboardView;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::Claims;
use crate::clients::{AccountsClient, CatalogClient, TransactionsClient};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The authenticated subject asked for someone else's dashboard.
    #[error("access denied")]
    Forbidden,
    #[error(transparent)]
    Upstream(#[from] ServiceError),
}

/// Serves the merged per-user view spanning all three backends. Constructed
/// once at startup with its clients injected; holds no mutable state.
pub struct DashboardService {
    accounts: AccountsClient,
    catalog: CatalogClient,
    transactions: TransactionsClient,
}

impl DashboardService {
    pub fn new(
        accounts: AccountsClient,
        catalog: CatalogClient,
        transactions: TransactionsClient,
    ) -> Self {
        Self { accounts, catalog, transactions }
    }

    /// Fan out to the three backends and merge fail-fast.
    ///
    /// The subject check runs before any backend call is issued. The three
    /// sub-calls have no data dependency on each other and run concurrently;
    /// once all have settled, the first failure in the fixed order (user,
    /// books, transactions) discards every partial result.
    pub async fn get_dashboard(
        &self,
        requested_user_id: &str,
        claims: &Claims,
        bearer: &str,
    ) -> Result<DashboardView, DashboardError> {
        if claims.sub != requested_user_id {
            warn!(
                requested_user_id,
                token_user_id = %claims.sub,
                "dashboard request for another user's data"
            );
            return Err(DashboardError::Forbidden);
        }

        let user_id: i64 = requested_user_id
            .parse()
            .map_err(|_| ServiceError::invalid_argument("userId must be numeric"))?;

        let (user, books, transactions) = tokio::join!(
            self.accounts.get_user(user_id, bearer),
            self.catalog.get_books_by_user(user_id),
            self.transactions.list_by_user(user_id, bearer),
        );

        let user = user?;
        let books = books?;
        let transactions = transactions?;

        info!(user_id, books = books.len(), transactions = transactions.len(), "dashboard assembled");
        Ok(DashboardView { user: Some(user), books, transactions })
    }
}
