//! HTTP client for the spreadsheet endpoint.
//!
//! The endpoint is a published spreadsheet script answering a plain `GET`
//! with a JSON [`Envelope`]. No query parameters and no authentication are
//! involved.
//!
//! # Example
//!
//! ```no_run
//! use sporehouse_core::{ReadingSource, SheetClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SheetClient::new("https://script.example.com/macros/s/abc/exec")?;
//! let envelope = client.fetch().await?;
//! println!("status: {}", envelope.status);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::raw::Envelope;
use crate::traits::ReadingSource;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the spreadsheet endpoint.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    url: String,
}

fn validate_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/').to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Error::InvalidUrl(format!(
            "URL must start with http:// or https://, got: {}",
            url
        )));
    }

    Ok(url)
}

impl SheetClient {
    /// Create a client with the default timeout.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let url = validate_url(url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Request)?;

        Ok(Self { client, url })
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(url: &str, client: Client) -> Result<Self> {
        let url = validate_url(url)?;
        Ok(Self { client, url })
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Envelope> {
        let status = response.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| status.to_string());

            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(Error::Request)?;
        debug!(bytes = body.len(), "Received response body");
        Envelope::from_json(&body)
    }
}

#[async_trait]
impl ReadingSource for SheetClient {
    async fn fetch(&self) -> Result<Envelope> {
        let response =
            self.client
                .get(&self.url)
                .send()
                .await
                .map_err(|e| Error::Unreachable {
                    url: self.url.clone(),
                    source: e,
                })?;

        self.handle_response(response).await
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SheetClient::new("https://script.example.com/exec");
        assert!(client.is_ok());

        let client = client.unwrap();
        assert_eq!(client.url(), "https://script.example.com/exec");
        assert_eq!(client.endpoint(), client.url());
    }

    #[test]
    fn test_client_normalizes_url() {
        let client = SheetClient::new("  http://localhost:8080/ ").unwrap();
        assert_eq!(client.url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_invalid_url() {
        let result = SheetClient::new("script.example.com/exec");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));

        let result = SheetClient::new("ftp://example.com");
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_client_with_custom_reqwest_client() {
        let http = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let client = SheetClient::with_client("https://script.example.com/exec/", http.clone()).unwrap();
        assert_eq!(client.url(), "https://script.example.com/exec");

        let result = SheetClient::with_client("script.example.com", http);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client =
            SheetClient::with_timeout("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let result = client.fetch().await;
        assert!(matches!(result, Err(Error::Unreachable { .. })));
    }
}
