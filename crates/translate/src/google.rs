//! Google translate HTTP backend.
//!
//! Uses the keyless `translate_a/single` endpoint:
//!
//! ```text
//! GET {endpoint}?client=gtx&sl=auto&tl=<code>&dt=t&q=<text>
//! ```
//!
//! The body is a nested JSON array whose first element lists translated
//! segments as `[translated, original, ...]`. Long inputs come back split into
//! several segments which are concatenated in order.

use crate::{Language, TranslateError, TranslateResult, Translator};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the Google translate endpoint.
#[derive(Clone, Debug)]
pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    /// Build a translator for `endpoint` whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns `TranslateError::InvalidConfig` if the endpoint is not an
    /// http(s) URL, or `TranslateError::Http` if the client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> TranslateResult<Self> {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(TranslateError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got {trimmed:?}"
            )));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: trimmed.to_string(),
            client,
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, dest: Language) -> TranslateResult<String> {
        tracing::debug!("translating {} chars to {}", text.chars().count(), dest);

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body: Value = resp.json().await?;
        parse_translation(&body)
    }
}

/// Extract the translated text from a `translate_a/single` response body.
///
/// # Errors
/// Returns `TranslateError::MalformedResponse` when the body does not have the
/// expected nesting, or `TranslateError::EmptyTranslation` when it carries no
/// translated text.
pub fn parse_translation(body: &Value) -> TranslateResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::MalformedResponse("missing segment list".into()))?;

    let mut out = String::new();
    for segment in segments {
        // Trailing transliteration segments have a null first element.
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            out.push_str(piece);
        }
    }

    if out.trim().is_empty() {
        return Err(TranslateError::EmptyTranslation);
    }
    Ok(out)
}
