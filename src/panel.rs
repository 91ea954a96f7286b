//! The API panel — validate, fetch, classify.
//!
//! DESIGN
//! ======
//! `submit` is total: every submission produces exactly one [`ApiResult`]
//! and never unwinds. Validation failures short-circuit before any network
//! I/O; cached `Success`/`Empty` outcomes short-circuit before a second
//! fetch. Classification is a pure function over the raw response so it can
//! be tested without a transport.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::{CachedOutcome, ResultCache};
use crate::endpoint::{AuthRule, EndpointSpec, QueryState};
use crate::fetch::{Fetch, FetchRequest, FetchResponse};
use crate::mapping::lookup;
use crate::outcome::{ApiResult, PanelError, Payload};

// =============================================================================
// PANEL
// =============================================================================

/// One external-API-backed display panel: an endpoint spec, a transport,
/// an optional credential, and an optional result memo cache.
pub struct ApiPanel {
    spec: EndpointSpec,
    fetcher: Arc<dyn Fetch>,
    secret: Option<String>,
    cache: Option<ResultCache>,
}

impl ApiPanel {
    #[must_use]
    pub fn new(spec: EndpointSpec, fetcher: Arc<dyn Fetch>) -> Self {
        Self { spec, fetcher, secret: None, cache: None }
    }

    /// Attach the credential injected per the spec's [`AuthRule`].
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Memoize `Success` and `Empty` outcomes for `ttl`.
    #[must_use]
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache = Some(ResultCache::new(ttl));
        self
    }

    #[must_use]
    pub fn spec(&self) -> &EndpointSpec {
        &self.spec
    }

    /// Run one submission: validate, consult the cache, fetch, classify.
    pub async fn submit(&self, state: &QueryState) -> ApiResult {
        if let Err(error) = self.spec.validate(state) {
            warn!(endpoint = self.spec.name, code = error.code(), error = %error, "submission rejected");
            return ApiResult::Failure(error);
        }

        let normalized = self.spec.normalized(state);
        let key = self.spec.cache_key(&normalized);

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                debug!(endpoint = self.spec.name, %key, "cache hit");
                return hit.into();
            }
        }

        let request = self.build_request(&normalized);
        info!(endpoint = self.spec.name, url = %request.url, "issuing GET");

        let response = match self.fetcher.get(request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(endpoint = self.spec.name, code = error.code(), error = %error, "transport failure");
                return ApiResult::Failure(error);
            }
        };

        let result = classify(&response, self.spec.items_path);
        match &result {
            ApiResult::Success(payload) => {
                info!(endpoint = self.spec.name, items = payload.items.len(), "submission succeeded");
            }
            ApiResult::Empty => info!(endpoint = self.spec.name, "empty result set"),
            ApiResult::Failure(error) => {
                warn!(endpoint = self.spec.name, code = error.code(), error = %error, "submission failed");
            }
        }

        if let Some(cache) = &self.cache {
            if let Some(outcome) = CachedOutcome::from_result(&result) {
                cache.insert(key, outcome);
            }
        }

        result
    }

    fn build_request(&self, normalized: &BTreeMap<&'static str, String>) -> FetchRequest {
        let (url, mut query) = self.spec.request_parts(normalized);
        let mut headers = Vec::new();

        if let Some(secret) = &self.secret {
            match self.spec.auth {
                AuthRule::None => {}
                AuthRule::Query { param } => query.push((param.to_owned(), secret.clone())),
                AuthRule::Header { name } => headers.push((name, secret.clone())),
            }
        }

        FetchRequest { url, query, headers }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a raw response into the three-way outcome. Pure function,
/// separated from the transport for testability.
#[must_use]
pub fn classify(response: &FetchResponse, items_path: Option<&str>) -> ApiResult {
    if !(200..300).contains(&response.status) {
        return ApiResult::Failure(PanelError::Http { status: response.status, body: response.body.clone() });
    }

    let tree: Value = match serde_json::from_str(&response.body) {
        Ok(tree) => tree,
        Err(error) => return ApiResult::Failure(PanelError::Parse(error.to_string())),
    };

    let items = match items_path {
        Some(path) => match lookup(&tree, path).and_then(Value::as_array) {
            Some(array) if !array.is_empty() => array.clone(),
            _ => return ApiResult::Empty,
        },
        None => vec![tree.clone()],
    };

    ApiResult::Success(Payload { tree, items })
}

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;
