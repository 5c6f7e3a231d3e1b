use async_trait::async_trait;
use common::{ServiceCallResult, ServiceError};
use models::{NewTransaction, TransactionRecord};

use super::http::send_with_retry;
use super::retry::RetryPolicy;
use super::HealthProbe;

/// Adapter over the lending transactions service HTTP API.
#[derive(Clone)]
pub struct TransactionsClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl TransactionsClient {
    pub fn new(http: reqwest::Client, base_url: String, retry: RetryPolicy) -> Self {
        Self { http, base_url, retry }
    }

    /// List transactions, forwarding pagination parameters untouched; the
    /// gateway does not paginate.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> ServiceCallResult<Vec<TransactionRecord>> {
        let url = format!("{}/transactions", self.base_url);
        let resp = send_with_retry(&self.retry, || {
            let mut req = self.http.get(&url);
            if let Some(page) = page {
                req = req.query(&[("page", page)]);
            }
            if let Some(limit) = limit {
                req = req.query(&[("limit", limit)]);
            }
            req
        })
        .await?;
        resp.json()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    pub async fn create(&self, input: &NewTransaction) -> ServiceCallResult<TransactionRecord> {
        let url = format!("{}/transactions", self.base_url);
        let resp = send_with_retry(&self.retry, || self.http.post(&url).json(input)).await?;
        resp.json()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    /// Transactions for one user, in the backend's returned order.
    pub async fn list_by_user(
        &self,
        user_id: i64,
        bearer: &str,
    ) -> ServiceCallResult<Vec<TransactionRecord>> {
        let url = format!("{}/transactions/user/{user_id}", self.base_url);
        let resp = send_with_retry(&self.retry, || {
            self.http
                .get(&url)
                .header(reqwest::header::AUTHORIZATION, bearer)
        })
        .await?;
        resp.json()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }
}

#[async_trait]
impl HealthProbe for TransactionsClient {
    fn name(&self) -> &'static str {
        "transaction-service"
    }

    async fn probe(&self) -> ServiceCallResult<()> {
        let url = format!("{}/transactions", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::unavailable(e.to_string()))?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ServiceError::unavailable(format!(
                "probe returned {}",
                resp.status()
            )))
        }
    }
}
