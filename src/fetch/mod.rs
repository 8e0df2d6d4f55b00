//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with a descriptive user agent
//! - GET requests to fetch page content
//! - Error classification into the crate error type
//!
//! The target site presents a broken certificate chain, so TLS validation
//! is disabled on the client.

mod limiter;

pub use limiter::{FixedDelay, NoDelay, Pause, Throttle};

use crate::config::LimitsConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fixed descriptive client identifier sent with every request
pub const USER_AGENT: &str = concat!("antologia/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for the whole run
///
/// # Arguments
///
/// * `limits` - Timing configuration (request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(limits: &LimitsConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(limits.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .danger_accept_invalid_certs(true)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// Non-success status codes and network failures both surface as errors;
/// the caller decides whether a failed page aborts anything (it never does,
/// pages are skipped at the traversal layer).
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - The request failed or returned a non-success status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let limits = LimitsConfig::default();
        assert!(build_http_client(&limits).is_ok());
    }

    #[test]
    fn test_user_agent_is_descriptive() {
        assert!(USER_AGENT.starts_with("antologia/"));
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("hola"))
            .mount(&server)
            .await;

        let client = build_http_client(&LimitsConfig::default()).unwrap();
        let url = Url::parse(&server.uri()).unwrap();
        let body = fetch_page(&client, &url).await.unwrap();
        assert_eq!(body, "hola");
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = build_http_client(&LimitsConfig::default()).unwrap();
        let url = Url::parse(&server.uri()).unwrap();
        let result = fetch_page(&client, &url).await;
        assert!(matches!(
            result,
            Err(ScrapeError::Status { status: 500, .. })
        ));
    }
}
