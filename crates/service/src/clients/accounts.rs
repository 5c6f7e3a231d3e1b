use async_trait::async_trait;
use common::{ServiceCallResult, ServiceError};
use models::{UserRecord, UserWire};
use tracing::debug;

use super::http::send_with_retry;
use super::retry::RetryPolicy;
use super::HealthProbe;

/// Adapter over the accounts (user) service HTTP API.
#[derive(Clone)]
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl AccountsClient {
    pub fn new(http: reqwest::Client, base_url: String, retry: RetryPolicy) -> Self {
        Self { http, base_url, retry }
    }

    /// Exchange credentials for a token. The upstream responds with the raw
    /// token text, sometimes prefixed with `Bearer `; callers always get the
    /// bare token.
    pub async fn login(&self, username: &str, password: &str) -> ServiceCallResult<String> {
        let url = format!("{}/users/login", self.base_url);
        let body = serde_json::json!({ "username": username, "password": password });
        let resp = send_with_retry(&self.retry, || self.http.post(&url).json(&body)).await?;
        let text = resp
            .text()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        let token = text.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        debug!(%username, "login forwarded to accounts service");
        Ok(token.to_string())
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> ServiceCallResult<String> {
        let url = format!("{}/users/register", self.base_url);
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = send_with_retry(&self.retry, || {
            let mut req = self.http.post(&url).json(&body);
            if let Some(role) = role {
                req = req.query(&[("role", role)]);
            }
            req
        })
        .await?;
        resp.text()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))
    }

    /// Fetch one user, forwarding the caller's bearer credential; the
    /// accounts service enforces its own subject check on this route.
    pub async fn get_user(&self, id: i64, bearer: &str) -> ServiceCallResult<UserRecord> {
        let url = format!("{}/users/{id}", self.base_url);
        let resp = send_with_retry(&self.retry, || {
            self.http
                .get(&url)
                .header(reqwest::header::AUTHORIZATION, bearer)
        })
        .await?;
        let wire: UserWire = resp
            .json()
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        Ok(UserRecord::from(wire))
    }
}

#[async_trait]
impl HealthProbe for AccountsClient {
    fn name(&self) -> &'static str {
        "user-service"
    }

    async fn probe(&self) -> ServiceCallResult<()> {
        let url = format!("{}/users", self.base_url);
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
