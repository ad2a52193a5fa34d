//! HTTP transport seam
//!
//! Every service client sends its requests through an [`HttpTransport`].
//! The default is [`ReqwestTransport`]; tests and embedders can inject
//! their own implementation through
//! [`ClientOptions::with_transport`](crate::ClientOptions::with_transport).

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::{error::SmappError, version};

/// Status code and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body; empty for non-success statuses
    pub body: Bytes,
}

impl RawResponse {
    /// Returns true for 2xx statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one fully built request and returns the raw response
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request
    async fn send(&self, request: reqwest::Request) -> Result<RawResponse, SmappError>;
}

/// [`HttpTransport`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with the given per-request timeout and the SDK user agent
    pub fn new(timeout: Duration) -> Result<Self, SmappError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(version::user_agent())
            .build()
            .map_err(|e| SmappError::from_reqwest(&e))?;

        Ok(Self { client })
    }

    /// Wrap an existing client; its own timeout and settings apply
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: reqwest::Request) -> Result<RawResponse, SmappError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SmappError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Discarding body of non-success response");
            return Ok(RawResponse {
                status: status.as_u16(),
                body: Bytes::new(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SmappError::from_reqwest(&e))?;

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
