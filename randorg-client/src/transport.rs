//! HTTPS transport for JSON-RPC exchanges
//!
//! The transport is deliberately the thinnest possible seam: one serialized
//! body out, one body back. Putting a trait here keeps everything above it
//! (validation, building, verification, orchestration) testable with
//! in-process stubs, and is the hook for callers who need to impose their
//! own timeout or retry policy - the client itself defines neither.

use randorg_core::{Error, Result};

/// One blocking request/response exchange with the provider
pub trait Transport {
    /// POST a serialized JSON-RPC request body, returning the reply body
    fn exchange(&self, body: &str) -> Result<String>;
}

/// Production transport: blocking HTTPS POST against a fixed endpoint
///
/// Uses the underlying HTTP client's default timeout behavior; no retries.
pub struct HttpTransport {
    url: String,
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport POSTing to the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// The endpoint this transport posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn exchange(&self, body: &str) -> Result<String> {
        tracing::debug!(url = %self.url, bytes = body.len(), "posting request");
        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::Transport(e.to_string()))?;
        tracing::debug!(%status, bytes = text.len(), "received reply");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_stores_url() {
        let transport = HttpTransport::new("https://api.random.org/json-rpc/4/invoke");
        assert_eq!(transport.url(), "https://api.random.org/json-rpc/4/invoke");
    }
}
