//! Credential lookup.
//!
//! The demo apps read one named secret from the environment at startup;
//! absence halts the process before any panel is constructed. Submission
//! failures never terminate the process and never re-read the environment.

use crate::outcome::PanelError;

/// An API credential resolved from the environment.
#[derive(Debug, Clone)]
pub struct Secret {
    var: &'static str,
    value: String,
}

impl Secret {
    /// Read `var` from the environment. Call after any `.env` load.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingSecret`] when the variable is unset or
    /// blank.
    pub fn from_env(var: &'static str) -> Result<Self, PanelError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Self { var, value }),
            _ => Err(PanelError::MissingSecret { var: var.to_owned() }),
        }
    }

    #[must_use]
    pub fn var(&self) -> &'static str {
        self.var
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Resolve a required secret or exit with the missing variable's name.
#[must_use]
pub fn require(var: &'static str) -> Secret {
    match Secret::from_env(var) {
        Ok(secret) => secret,
        Err(error) => {
            tracing::error!(var, code = error.code(), "{error}. {}", error.hint());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "secret_test.rs"]
mod tests;
