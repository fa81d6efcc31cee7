//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables. Binaries hand in a lookup
//! function (normally `std::env::var`); tests hand in a map.

use crate::constants::{
    DEFAULT_MAX_QUESTION_LEN, DEFAULT_MAX_SESSIONS, DEFAULT_TRANSLATE_ENDPOINT,
    DEFAULT_TRANSLATE_TIMEOUT_SECS,
};
use crate::{ChatError, ChatResult};
use std::time::Duration;

/// Environment variable naming the translation endpoint.
pub const TRANSLATE_URL_VAR: &str = "HEALTHBOT_TRANSLATE_URL";
/// Environment variable naming the translation timeout in seconds.
pub const TRANSLATE_TIMEOUT_VAR: &str = "HEALTHBOT_TRANSLATE_TIMEOUT_SECS";
/// Environment variable naming the maximum question length.
pub const MAX_QUESTION_LEN_VAR: &str = "HEALTHBOT_MAX_QUESTION_LEN";
/// Environment variable naming the cap on live sessions.
pub const MAX_SESSIONS_VAR: &str = "HEALTHBOT_MAX_SESSIONS";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    translate_endpoint: String,
    translate_timeout: Duration,
    max_question_len: usize,
    max_sessions: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        translate_endpoint: String,
        translate_timeout: Duration,
        max_question_len: usize,
        max_sessions: usize,
    ) -> ChatResult<Self> {
        if translate_endpoint.trim().is_empty() {
            return Err(ChatError::InvalidInput(
                "translate_endpoint cannot be empty".into(),
            ));
        }
        if translate_timeout.is_zero() {
            return Err(ChatError::InvalidInput(
                "translate_timeout must be greater than zero".into(),
            ));
        }
        if max_question_len == 0 {
            return Err(ChatError::InvalidInput(
                "max_question_len must be greater than zero".into(),
            ));
        }
        if max_sessions == 0 {
            return Err(ChatError::InvalidInput(
                "max_sessions must be greater than zero".into(),
            ));
        }

        Ok(Self {
            translate_endpoint: translate_endpoint.trim().to_string(),
            translate_timeout,
            max_question_len,
            max_sessions,
        })
    }

    /// Resolve configuration from a variable lookup, applying defaults for unset values.
    ///
    /// # Errors
    /// Returns `ChatError::InvalidInput` if a set value does not parse or is out of range.
    pub fn from_lookup<F>(lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = non_blank(lookup(TRANSLATE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_TRANSLATE_ENDPOINT.to_string());
        let timeout = translate_timeout_from_env_value(lookup(TRANSLATE_TIMEOUT_VAR))?;
        let max_question_len = max_question_len_from_env_value(lookup(MAX_QUESTION_LEN_VAR))?;
        let max_sessions = max_sessions_from_env_value(lookup(MAX_SESSIONS_VAR))?;

        Self::new(endpoint, timeout, max_question_len, max_sessions)
    }

    pub fn translate_endpoint(&self) -> &str {
        &self.translate_endpoint
    }

    pub fn translate_timeout(&self) -> Duration {
        self.translate_timeout
    }

    pub fn max_question_len(&self) -> usize {
        self.max_question_len
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            translate_timeout: Duration::from_secs(DEFAULT_TRANSLATE_TIMEOUT_SECS),
            max_question_len: DEFAULT_MAX_QUESTION_LEN,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the translation timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn translate_timeout_from_env_value(value: Option<String>) -> ChatResult<Duration> {
    let Some(value) = non_blank(value) else {
        return Ok(Duration::from_secs(DEFAULT_TRANSLATE_TIMEOUT_SECS));
    };

    let secs: u64 = value.parse().map_err(|_| {
        ChatError::InvalidInput(format!(
            "{TRANSLATE_TIMEOUT_VAR} must be a whole number of seconds, got {value:?}"
        ))
    })?;
    Ok(Duration::from_secs(secs))
}

/// Parse the maximum question length from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default length.
pub fn max_question_len_from_env_value(value: Option<String>) -> ChatResult<usize> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_MAX_QUESTION_LEN);
    };

    value.parse().map_err(|_| {
        ChatError::InvalidInput(format!(
            "{MAX_QUESTION_LEN_VAR} must be a positive integer, got {value:?}"
        ))
    })
}

/// Parse the live session cap from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default cap.
pub fn max_sessions_from_env_value(value: Option<String>) -> ChatResult<usize> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_MAX_SESSIONS);
    };

    value.parse().map_err(|_| {
        ChatError::InvalidInput(format!(
            "{MAX_SESSIONS_VAR} must be a positive integer, got {value:?}"
        ))
    })
}
