//! HTTP seam — one trait, one reqwest-backed implementation.
//!
//! DESIGN
//! ======
//! Panels call through the [`Fetch`] trait so tests can substitute a
//! scripted fetcher and count issued requests. The real implementation is a
//! thin reqwest wrapper with request and connect timeouts; query encoding
//! is left to the transport.

use std::time::Duration;

use crate::outcome::PanelError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// A fully prepared GET: URL, query pairs, extra headers.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(&'static str, String)>,
}

/// Raw response before classification.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Transport abstraction. Implementations perform exactly one GET per call.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    /// Issue the request and return the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Network`] when no response arrives.
    async fn get(&self, request: FetchRequest) -> Result<FetchResponse, PanelError>;
}

/// reqwest-backed transport used by the demo binaries.
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Build with the default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ClientBuild`] if the client cannot be built.
    pub fn new() -> Result<Self, PanelError> {
        Self::with_timeouts(DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    }

    /// Build with explicit request and connect timeouts in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ClientBuild`] if the client cannot be built.
    pub fn with_timeouts(request_secs: u64, connect_secs: u64) -> Result<Self, PanelError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_secs))
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()
            .map_err(|e| PanelError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetch {
    async fn get(&self, request: FetchRequest) -> Result<FetchResponse, PanelError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| PanelError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PanelError::Network(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}
