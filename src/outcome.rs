//! Submission outcomes and the panel error taxonomy.
//!
//! DESIGN
//! ======
//! Every submission produces exactly one [`ApiResult`]. Failures are values,
//! never panics: each [`PanelError`] renders a human-readable message, a
//! grepable code for logs, and a cause-specific remediation hint for the
//! user-facing surface.

use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by panel configuration and submission.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Local validation rejected the parameters; no request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request never got a response (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The remote API rejected the request with a non-2xx status.
    #[error("API returned HTTP {status}")]
    Http { status: u16, body: String },

    /// A 2xx response body was not valid JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The named credential is absent from the environment.
    #[error("missing API credential: env var {var} not set")]
    MissingSecret { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl PanelError {
    /// Grepable error code, mirrored into logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "E_INVALID_INPUT",
            Self::Network(_) => "E_NETWORK",
            Self::Http { .. } => "E_HTTP",
            Self::Parse(_) => "E_PARSE",
            Self::MissingSecret { .. } => "E_MISSING_SECRET",
            Self::ClientBuild(_) => "E_CLIENT_BUILD",
        }
    }

    /// Cause-specific remediation line shown under the failure message.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Adjust the rejected parameter and resubmit.",
            Self::Network(_) => "Check your network connection and try again.",
            Self::Http { status: 401, .. } => "Check that your API credential is valid and not expired.",
            Self::Http { status: 403, .. } => "The credential lacks access, or the daily quota is exhausted.",
            Self::Http { status: 404, .. } => "Nothing matched — check the spelling and try again.",
            Self::Http { status: 429, .. } => "The API is rate limiting; wait a moment before retrying.",
            Self::Http { .. } => "The API rejected the request; try again later.",
            Self::Parse(_) => "The API sent an unexpected response format.",
            Self::MissingSecret { .. } => "Add the named variable to your environment or .env file.",
            Self::ClientBuild(_) => "This is a local TLS or client setup problem, not an API fault.",
        }
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Parsed body of a successful submission.
#[derive(Debug, Clone)]
pub struct Payload {
    /// Full parsed response tree.
    pub tree: Value,
    /// Extracted result items: the collection at the spec's `items_path`,
    /// or the whole tree for single-object endpoints.
    pub items: Vec<Value>,
}

/// Three-way outcome of one submission.
///
/// `Empty` is deliberately distinct from `Success` with zero items: the
/// renderer shows a neutral notice instead of a blank grid.
#[derive(Debug)]
pub enum ApiResult {
    Success(Payload),
    Empty,
    Failure(PanelError),
}

impl ApiResult {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_401_hints_at_credential() {
        let err = PanelError::Http { status: 401, body: String::new() };
        assert_eq!(err.code(), "E_HTTP");
        assert!(err.hint().contains("credential"));
    }

    #[test]
    fn http_404_hints_at_spelling() {
        let err = PanelError::Http { status: 404, body: String::new() };
        assert!(err.hint().contains("spelling"));
    }

    #[test]
    fn messages_are_human_readable() {
        let err = PanelError::MissingSecret { var: "YOUTUBE_API_KEY".into() };
        assert_eq!(err.to_string(), "missing API credential: env var YOUTUBE_API_KEY not set");
    }

    #[test]
    fn failure_detection() {
        assert!(ApiResult::Failure(PanelError::Network("down".into())).is_failure());
        assert!(!ApiResult::Empty.is_failure());
    }
}
