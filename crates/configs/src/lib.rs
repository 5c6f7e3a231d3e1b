use anyhow::Result;
use anyhow::anyhow;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backends: BackendsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendsConfig {
    /// Catalog (book) service gRPC endpoint.
    pub catalog_addr: String,
    /// Accounts (user) service HTTP base URL.
    pub accounts_base_url: String,
    /// Lending transactions service HTTP base URL.
    pub transactions_base_url: String,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            catalog_addr: "http://book-service:50051".into(),
            accounts_base_url: "http://user-service:8080".into(),
            transactions_base_url: "http://transaction-service:6000".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Base64-encoded HMAC-SHA512 signing secret shared with the accounts
    /// service. Must be provided via config.toml or `JWT_SECRET`.
    #[serde(default)]
    pub jwt_secret: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load config.toml when present, apply environment overrides, then
    /// normalize and validate. A missing file is fine; an invalid one is not.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if e.downcast_ref::<std::io::Error>().is_some() => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Environment wins over the file: gateway deployments are env-driven.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        let port_var = std::env::var("SERVER_PORT").or_else(|_| std::env::var("PORT"));
        if let Some(port) = port_var.ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Ok(addr) = std::env::var("BOOK_SERVICE_URL") {
            self.backends.catalog_addr = addr;
        }
        if let Ok(url) = std::env::var("USER_SERVICE_URL") {
            self.backends.accounts_base_url = url;
        }
        if let Ok(url) = std::env::var("TRANSACTION_SERVICE_URL") {
            self.backends.transactions_base_url = url;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.backends.normalize()?;
        self.decoded_secret()?;
        Ok(())
    }

    /// The signing secret is provisioned base64-encoded; verification wants
    /// the raw bytes.
    pub fn decoded_secret(&self) -> Result<Vec<u8>> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(anyhow!(
                "auth.jwt_secret is empty; provide it in config.toml or via JWT_SECRET"
            ));
        }
        BASE64
            .decode(self.auth.jwt_secret.trim())
            .map_err(|e| anyhow!("auth.jwt_secret is not valid base64: {e}"))
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }
}

impl BackendsConfig {
    fn normalize(&mut self) -> Result<()> {
        // gRPC endpoints are often given as bare host:port; tonic wants a scheme.
        if !self.catalog_addr.starts_with("http://") && !self.catalog_addr.starts_with("https://") {
            self.catalog_addr = format!("http://{}", self.catalog_addr);
        }
        for (name, url) in [
            ("backends.accounts_base_url", &mut self.accounts_base_url),
            ("backends.transactions_base_url", &mut self.transactions_base_url),
        ] {
            if url.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow!("{name} must start with http:// or https://"));
            }
            while url.ends_with('/') {
                url.pop();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = BASE64.encode(b"a test signing secret of decent length");
        cfg
    }

    #[test]
    fn defaults_normalize_cleanly() {
        let mut cfg = valid_config();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.backends.catalog_addr, "http://book-service:50051");
    }

    #[test]
    fn bare_catalog_addr_gets_scheme() {
        let mut cfg = valid_config();
        cfg.backends.catalog_addr = "book-service:50051".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.backends.catalog_addr, "http://book-service:50051");
    }

    #[test]
    fn trailing_slash_stripped_from_base_urls() {
        let mut cfg = valid_config();
        cfg.backends.accounts_base_url = "http://user-service:8080/".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.backends.accounts_base_url, "http://user-service:8080");
    }

    #[test]
    fn empty_secret_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn non_base64_secret_rejected() {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = "not base64 at all!!!".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn secret_round_trips_through_base64() {
        let cfg = valid_config();
        assert_eq!(
            cfg.decoded_secret().unwrap(),
            b"a test signing secret of decent length".to_vec()
        );
    }

    #[test]
    fn toml_parses_into_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [backends]
            catalog_addr = "http://localhost:50051"
            accounts_base_url = "http://localhost:8080"
            transactions_base_url = "http://localhost:6000"

            [auth]
            jwt_secret = "c2VjcmV0"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.auth.jwt_secret, "c2VjcmV0");
    }
}
