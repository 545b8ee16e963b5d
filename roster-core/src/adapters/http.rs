//! HTTP data source
//!
//! Pulls the user and item collections from the web API. Each collection
//! is one blocking GET returning a JSON array of flat objects.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::domain::{RawItem, RawUser};
use crate::ports::DataSource;

/// Blocking JSON API client
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// GET a JSON array and deserialize every element
    pub fn get_collection<T: DeserializeOwned>(&self, url: &Url) -> Result<Vec<T>> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.map_request_error(url, e))?;

        self.check_response_status(url, &response)?;

        let body = response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse JSON array from {}", url))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, url: &Url, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!(
                "Request to {} timed out after {} seconds",
                url,
                self.timeout.as_secs()
            )
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to {}", url)
        } else {
            anyhow::anyhow!("Request to {} failed: {}", url, error)
        }
    }

    /// Any non-2xx status fails the fetch
    fn check_response_status(&self, url: &Url, response: &reqwest::blocking::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            anyhow::bail!("API error: HTTP {} from {}", status.as_u16(), url)
        }
    }
}

/// Data source backed by the web API
#[derive(Debug)]
pub struct HttpDataSource {
    client: ApiClient,
    users_url: Url,
    items_url: Url,
}

impl HttpDataSource {
    pub fn new(client: ApiClient, users_url: Url, items_url: Url) -> Self {
        Self {
            client,
            users_url,
            items_url,
        }
    }

    /// Build from the configured endpoints and timeout
    pub fn from_config(config: &Config) -> DomainResult<Self> {
        let users_url = config.users_endpoint()?;
        let items_url = config.items_endpoint()?;
        let client = ApiClient::new(Duration::from_secs(config.timeout_secs))
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))?;

        Ok(Self::new(client, users_url, items_url))
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    pub fn items_url(&self) -> &Url {
        &self.items_url
    }
}

impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_users(&self) -> DomainResult<Vec<RawUser>> {
        tracing::debug!(url = %self.users_url, "fetching users");
        self.client
            .get_collection(&self.users_url)
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))
    }

    fn fetch_items(&self) -> DomainResult<Vec<RawItem>> {
        tracing::debug!(url = %self.items_url, "fetching items");
        self.client
            .get_collection(&self.items_url)
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock_server::{MockApiConfig, MockApiServer};

    fn source_for(server: &MockApiServer) -> HttpDataSource {
        let client = ApiClient::new(Duration::from_secs(5)).unwrap();
        HttpDataSource::new(
            client,
            Url::parse(&format!("{}/api/users/", server.base_url())).unwrap(),
            Url::parse(&format!("{}/api/items/", server.base_url())).unwrap(),
        )
    }

    #[test]
    fn test_fetch_users_and_items() {
        let server = MockApiServer::start(MockApiConfig::default()).unwrap();
        let source = source_for(&server);

        let users = source.fetch_users().unwrap();
        let items = source.fetch_items().unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[0].city.as_deref(), Some("NYC"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].price, None);
    }

    #[test]
    fn test_server_error_fails_fetch() {
        let server = MockApiServer::start(MockApiConfig {
            fail_status: Some(500),
            ..Default::default()
        })
        .unwrap();
        let source = source_for(&server);

        let err = source.fetch_users().unwrap_err();
        assert!(matches!(err, DomainError::Fetch(_)));
        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn test_not_found_fails_fetch() {
        let server = MockApiServer::start(MockApiConfig::default()).unwrap();
        let client = ApiClient::new(Duration::from_secs(5)).unwrap();
        let source = HttpDataSource::new(
            client,
            Url::parse(&format!("{}/api/missing/", server.base_url())).unwrap(),
            Url::parse(&format!("{}/api/items/", server.base_url())).unwrap(),
        );

        let err = source.fetch_users().unwrap_err();
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_malformed_json_fails_fetch() {
        let server = MockApiServer::start(MockApiConfig {
            users_body: Some("[{\"id\": 1,".to_string()),
            ..Default::default()
        })
        .unwrap();
        let source = source_for(&server);

        let err = source.fetch_users().unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON array"));
    }

    #[test]
    fn test_non_array_body_fails_fetch() {
        let server = MockApiServer::start(MockApiConfig {
            items_body: Some(r#"{"results": []}"#.to_string()),
            ..Default::default()
        })
        .unwrap();
        let source = source_for(&server);

        assert!(source.fetch_items().is_err());
    }

    #[test]
    fn test_connection_refused() {
        // Bind then drop a listener to find a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::new(Duration::from_secs(2)).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{}/api/users/", port)).unwrap();
        let source = HttpDataSource::new(client, url.clone(), url);

        let err = source.fetch_users().unwrap_err();
        assert!(matches!(err, DomainError::Fetch(_)));
    }

    #[test]
    fn test_from_config_uses_endpoints() {
        let config = Config {
            api_base_url: "http://localhost:8123".to_string(),
            ..Default::default()
        };
        let source = HttpDataSource::from_config(&config).unwrap();
        assert_eq!(source.users_url().as_str(), "http://localhost:8123/api/users/");
        assert_eq!(source.items_url().as_str(), "http://localhost:8123/api/items/");
    }
}
