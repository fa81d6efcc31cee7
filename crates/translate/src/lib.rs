//! # Healthbot Translate
//!
//! Translation boundary for chatbot replies.
//!
//! The knowledge base is written in English. Replies requested in another
//! [`Language`] pass through a [`Translator`]; the shipped implementation is
//! [`GoogleTranslator`], a thin HTTP client for the public Google translate
//! endpoint.
//!
//! Callers decide what a failure means. `healthbot-core` never surfaces a
//! [`TranslateError`] to the user; it falls back to the English text.

mod google;

pub use google::{parse_translation, GoogleTranslator};
pub use healthbot_types::Language;

use async_trait::async_trait;

/// Errors returned by translation backends.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translator configuration is invalid: {0}")]
    InvalidConfig(String),
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service returned status {0}")]
    Status(u16),
    #[error("translation response is malformed: {0}")]
    MalformedResponse(String),
    #[error("translation service returned no text")]
    EmptyTranslation,
}

pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

/// Translates English text into a target language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Translate `text` into `dest`.
    async fn translate(&self, text: &str, dest: Language) -> TranslateResult<String>;
}
