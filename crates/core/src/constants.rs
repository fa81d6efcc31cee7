//! Constants used throughout the healthbot core crate.
//!
//! Fixed reply texts live here so that every surface (REST, CLI) renders the
//! same wording.

/// Default REST listen address when `HEALTHBOT_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default translation endpoint.
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Default translation request timeout, in seconds.
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 10;

/// Default upper bound on question length, in characters.
pub const DEFAULT_MAX_QUESTION_LEN: usize = 2_000;

/// Default cap on live conversation sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Reply when no known topic appears in the question.
pub const FALLBACK_RESPONSE: &str = "Sorry, I don’t have information on that. Please try asking about Dengue, Malaria, COVID-19, or Typhoid.";

/// Prefix placed before the English reply when translation fails.
pub const TRANSLATION_FAILED_MARKER: &str = "(Translation failed)";

/// Warning shown when a question is empty.
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question.";

/// Short introduction shown by the interactive surfaces.
pub const GREETING: &str =
    "Ask me about Dengue, Malaria, COVID-19, or Typhoid (symptoms, prevention, treatment).";
