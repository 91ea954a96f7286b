//! Endpoint descriptions and per-submission query state.
//!
//! DESIGN
//! ======
//! An [`EndpointSpec`] is declarative and immutable: base URL (optionally
//! carrying `{name}` path placeholders), parameter declarations, fixed
//! always-sent query pairs, the credential injection rule, and the path of
//! the response's result collection. [`QueryState`] holds one submission's
//! user-entered values. Validation and normalization both run against the
//! spec before any network I/O; the normalized parameter set doubles as the
//! memo-cache key, so a defaulted value and an explicitly supplied equal
//! value share one entry.

use std::collections::BTreeMap;
use std::fmt;

use crate::outcome::PanelError;

// =============================================================================
// PARAMETER DECLARATIONS
// =============================================================================

/// Value shapes a parameter accepts, mirroring the form controls of the
/// demo apps: free text, a select with a fixed option set, an integer
/// slider with inclusive bounds.
#[derive(Debug, Clone, Copy)]
pub enum ParamKind {
    Text,
    Choice { allowed: &'static [&'static str] },
    Range { min: i64, max: i64 },
}

/// Declaration of one query or path parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<&'static str>,
}

/// How the API credential is attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRule {
    /// Endpoint needs no credential.
    None,
    /// Credential travels as a query parameter (`key=`, `api_key=`, …).
    Query { param: &'static str },
    /// Credential travels as a request header.
    Header { name: &'static str },
}

/// Declarative description of one external HTTP GET endpoint.
///
/// All fields are `'static` so app specs can live in `const`s; the spec is
/// read-only after construction.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSpec {
    /// Short app name used in logs and cache keys.
    pub name: &'static str,
    /// Base URL; `{name}` segments are substituted from parameters.
    pub base_url: &'static str,
    pub params: &'static [ParamSpec],
    /// Query pairs sent on every request regardless of user input.
    pub fixed: &'static [(&'static str, &'static str)],
    pub auth: AuthRule,
    /// JSON path of the result collection; `None` for single-object
    /// endpoints. An empty or absent collection classifies as `Empty`.
    pub items_path: Option<&'static str>,
}

// =============================================================================
// QUERY STATE
// =============================================================================

/// A single user-entered parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// User-entered parameter values for one submission. Stateless across
/// submissions; build a fresh one per user action.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    values: BTreeMap<String, ParamValue>,
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.values.insert(name.to_owned(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set the parameter only when the caller actually has a value —
    /// convenient for optional CLI arguments.
    #[must_use]
    pub fn with_opt(mut self, name: &str, value: Option<impl Into<ParamValue>>) -> Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

// =============================================================================
// VALIDATION & NORMALIZATION
// =============================================================================

impl EndpointSpec {
    /// Validate user parameters against the declarations. Fails fast with
    /// `InvalidInput` before any request is constructed.
    pub fn validate(&self, state: &QueryState) -> Result<(), PanelError> {
        for name in state.names() {
            if !self.params.iter().any(|p| p.name == name) {
                return Err(PanelError::InvalidInput(format!("unknown parameter `{name}`")));
            }
        }

        for param in self.params {
            let Some(value) = state.get(param.name) else {
                if param.required && param.default.is_none() {
                    return Err(PanelError::InvalidInput(format!(
                        "missing required parameter `{}`",
                        param.name
                    )));
                }
                continue;
            };
            param.check(value)?;
        }

        Ok(())
    }

    /// Merge declared defaults with user values, keyed in sorted order.
    /// Assumes `validate` has passed.
    #[must_use]
    pub fn normalized(&self, state: &QueryState) -> BTreeMap<&'static str, String> {
        let mut merged = BTreeMap::new();
        for param in self.params {
            match state.get(param.name) {
                Some(value) => {
                    merged.insert(param.name, value.to_string());
                }
                None => {
                    if let Some(default) = param.default {
                        merged.insert(param.name, default.to_owned());
                    }
                }
            }
        }
        merged
    }

    /// Stable memoization key for a normalized parameter set.
    #[must_use]
    pub fn cache_key(&self, normalized: &BTreeMap<&'static str, String>) -> String {
        let pairs: Vec<String> = normalized.iter().map(|(k, v)| format!("{k}={v}")).collect();
        format!("{}?{}", self.name, pairs.join("&"))
    }

    /// Split the normalized set into the final URL (path placeholders
    /// substituted) and the remaining query pairs, fixed pairs first.
    /// Placeholder values are substituted verbatim.
    #[must_use]
    pub fn request_parts(&self, normalized: &BTreeMap<&'static str, String>) -> (String, Vec<(String, String)>) {
        let mut url = self.base_url.to_owned();
        let mut query: Vec<(String, String)> = self
            .fixed
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();

        for (name, value) in normalized {
            let placeholder = format!("{{{name}}}");
            if url.contains(&placeholder) {
                url = url.replace(&placeholder, value);
            } else {
                query.push(((*name).to_owned(), value.clone()));
            }
        }

        (url, query)
    }
}

impl ParamSpec {
    fn check(&self, value: &ParamValue) -> Result<(), PanelError> {
        match self.kind {
            ParamKind::Text => Ok(()),
            ParamKind::Choice { allowed } => {
                let raw = value.to_string();
                if allowed.contains(&raw.as_str()) {
                    Ok(())
                } else {
                    Err(PanelError::InvalidInput(format!(
                        "parameter `{}` must be one of: {}",
                        self.name,
                        allowed.join(", ")
                    )))
                }
            }
            ParamKind::Range { min, max } => {
                let number = match value {
                    ParamValue::Int(i) => *i,
                    ParamValue::Str(s) => s.parse::<i64>().map_err(|_| {
                        PanelError::InvalidInput(format!("parameter `{}` must be an integer", self.name))
                    })?,
                };
                if (min..=max).contains(&number) {
                    Ok(())
                } else {
                    Err(PanelError::InvalidInput(format!(
                        "parameter `{}` must be between {min} and {max}",
                        self.name
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
