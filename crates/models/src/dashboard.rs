use serde::{Deserialize, Serialize};

use crate::book::BookRecord;
use crate::transaction::TransactionRecord;
use crate::user::UserRecord;

/// The merged per-user view served by `/dashboard/:userId`. Assembled
/// transiently per request; the gateway never stores one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub user: Option<UserRecord>,
    pub books: Vec<BookRecord>,
    pub transactions: Vec<TransactionRecord>,
}
