//! Chat service.
//!
//! Ties the intent resolver to the translator and to session history. This is
//! the single entry point both the REST API and the CLI call.
//!
//! ## Translation policy
//!
//! English replies are returned exactly as the resolver produced them and the
//! translator is never called. For any other language, a translation failure
//! of any kind is logged and replaced by the English reply prefixed with
//! [`TRANSLATION_FAILED_MARKER`]; it is never reported to the caller as an
//! error.

use crate::config::CoreConfig;
use crate::constants::TRANSLATION_FAILED_MARKER;
use crate::error::{ChatError, ChatResult};
use crate::intent;
use crate::knowledge::KnowledgeBase;
use crate::session::SessionStore;
use crate::validation::validate_question;
use healthbot_translate::{GoogleTranslator, Translator};
use healthbot_types::Language;
use std::sync::Arc;
use uuid::Uuid;

/// Answers questions, optionally in translation.
#[derive(Clone)]
pub struct ChatService {
    kb: KnowledgeBase,
    translator: Arc<dyn Translator>,
    max_question_len: usize,
}

impl ChatService {
    /// Create a service over the built-in knowledge base using `translator`.
    pub fn new(translator: Arc<dyn Translator>, max_question_len: usize) -> Self {
        Self {
            kb: KnowledgeBase::builtin(),
            translator,
            max_question_len,
        }
    }

    /// Create a service backed by [`GoogleTranslator`] as configured in `cfg`.
    ///
    /// # Errors
    /// Returns `ChatError::Translation` if the translator cannot be constructed.
    pub fn from_config(cfg: &CoreConfig) -> ChatResult<Self> {
        let translator = GoogleTranslator::new(cfg.translate_endpoint(), cfg.translate_timeout())?;
        Ok(Self::new(Arc::new(translator), cfg.max_question_len()))
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Reply to `question` in `lang`.
    ///
    /// Total: every input yields a reply and translation failures are folded
    /// into the text.
    pub async fn reply(&self, question: &str, lang: Language) -> String {
        let resolved = intent::resolve_in(&self.kb, question);
        tracing::debug!("resolved question to {:?}", summarise(&resolved));
        let response = resolved.response();

        if !lang.needs_translation() {
            return response;
        }

        match self.translator.translate(&response, lang).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    "translation to {} via {} failed: {}",
                    lang,
                    self.translator.name(),
                    e
                );
                format!("{TRANSLATION_FAILED_MARKER} {response}")
            }
        }
    }

    /// Validate `question`, reply to it, and return the reply.
    ///
    /// # Errors
    /// Returns `ChatError::EmptyQuestion` or `ChatError::QuestionTooLong` for
    /// invalid questions.
    pub async fn ask(&self, question: &str, lang: Language) -> ChatResult<String> {
        let question = validate_question(question, self.max_question_len)?;
        Ok(self.reply(question.as_str(), lang).await)
    }

    /// Ask within a session, recording the exchange in its history.
    ///
    /// The question is stored as typed (untrimmed) and the reply as returned.
    /// Nothing is recorded when the question is rejected.
    ///
    /// # Errors
    /// Returns `ChatError::EmptyQuestion`/`ChatError::QuestionTooLong` for
    /// invalid questions and `ChatError::SessionNotFound` for unknown sessions.
    pub async fn ask_in_session(
        &self,
        sessions: &SessionStore,
        session_id: Uuid,
        question: &str,
        lang: Language,
    ) -> ChatResult<String> {
        if !sessions.contains(session_id) {
            return Err(ChatError::SessionNotFound(session_id));
        }

        let reply = self.ask(question, lang).await?;
        sessions.append_exchange(session_id, question, &reply)?;
        Ok(reply)
    }
}

fn summarise(intent: &intent::Intent) -> (Option<&'static str>, Option<&'static str>) {
    match intent {
        intent::Intent::Field { topic, field } => (Some(topic.name), Some(field.as_str())),
        intent::Intent::TopicOnly { topic } => (Some(topic.name), None),
        intent::Intent::Unknown => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MAX_QUESTION_LEN, FALLBACK_RESPONSE};
    use crate::session::Speaker;
    use async_trait::async_trait;
    use healthbot_translate::{TranslateError, TranslateResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TaggingTranslator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Translator for TaggingTranslator {
        fn name(&self) -> &str {
            "tagging"
        }

        async fn translate(&self, text: &str, dest: Language) -> TranslateResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("<{dest}>{text}"))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn translate(&self, _text: &str, _dest: Language) -> TranslateResult<String> {
            Err(TranslateError::Status(503))
        }
    }

    fn service_with(translator: Arc<dyn Translator>) -> ChatService {
        ChatService::new(translator, DEFAULT_MAX_QUESTION_LEN)
    }

    #[tokio::test]
    async fn test_english_never_invokes_translator() {
        let translator = Arc::new(TaggingTranslator::default());
        let service = service_with(translator.clone());

        let question = "what are the symptoms of dengue";
        let reply = service.reply(question, Language::En).await;

        assert_eq!(reply, intent::get_response(question));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_other_languages_are_translated() {
        let translator = Arc::new(TaggingTranslator::default());
        let service = service_with(translator.clone());

        let reply = service.reply("malaria treatment", Language::Hi).await;

        assert_eq!(
            reply,
            "<hi>Antimalarial medicines prescribed by doctors are effective."
        );
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_translation_failure_falls_back_with_marker() {
        let service = service_with(Arc::new(FailingTranslator));

        let reply = service.reply("tell me about flu", Language::Ta).await;

        assert_eq!(reply, format!("(Translation failed) {FALLBACK_RESPONSE}"));
    }

    #[tokio::test]
    async fn test_unreachable_translator_falls_back_with_marker() {
        let cfg = CoreConfig::new(
            "http://127.0.0.1:9/translate_a/single".into(),
            std::time::Duration::from_secs(2),
            DEFAULT_MAX_QUESTION_LEN,
            crate::constants::DEFAULT_MAX_SESSIONS,
        )
        .expect("config should be valid");
        let service = ChatService::from_config(&cfg).expect("service should build");

        let reply = service.reply("covid prevention", Language::Hi).await;

        assert!(reply.starts_with(TRANSLATION_FAILED_MARKER));
        assert!(reply.ends_with("get vaccinated."));
    }

    #[tokio::test]
    async fn test_ask_rejects_empty_question() {
        let service = service_with(Arc::new(FailingTranslator));
        let err = service
            .ask("   ", Language::En)
            .await
            .expect_err("should reject empty question");
        assert!(matches!(err, ChatError::EmptyQuestion));
        assert_eq!(err.to_string(), "Please enter a question.");
    }

    #[tokio::test]
    async fn test_ask_in_session_records_exchange() {
        let service = service_with(Arc::new(TaggingTranslator::default()));
        let sessions = SessionStore::new();
        let id = sessions.create().unwrap();

        let reply = service
            .ask_in_session(&sessions, id, "Typhoid symptoms?", Language::En)
            .await
            .expect("ask should succeed");

        let history = sessions.history(id).expect("session should exist");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].speaker, Speaker::You);
        assert_eq!(history[0].message, "Typhoid symptoms?");
        assert_eq!(history[1].speaker, Speaker::Chatbot);
        assert_eq!(history[1].message, reply);
    }

    #[tokio::test]
    async fn test_rejected_question_records_nothing() {
        let service = service_with(Arc::new(TaggingTranslator::default()));
        let sessions = SessionStore::new();
        let id = sessions.create().unwrap();

        assert!(service
            .ask_in_session(&sessions, id, "", Language::En)
            .await
            .is_err());
        assert_eq!(sessions.history(id).map(|h| h.len()), Some(0));
    }

    #[tokio::test]
    async fn test_ask_in_unknown_session() {
        let translator = Arc::new(TaggingTranslator::default());
        let service = service_with(translator.clone());
        let sessions = SessionStore::new();
        let missing = Uuid::new_v4();

        let err = service
            .ask_in_session(&sessions, missing, "dengue", Language::Hi)
            .await
            .expect_err("should reject unknown session");

        assert!(matches!(err, ChatError::SessionNotFound(id) if id == missing));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }
}
