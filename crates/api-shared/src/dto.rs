//! Request and response bodies for the healthbot APIs.

use healthbot_types::Language;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A knowledge-base topic and its one-line description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopicSummary {
    pub name: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListTopicsRes {
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LanguageInfo {
    pub code: Language,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListLanguagesRes {
    pub languages: Vec<LanguageInfo>,
}

/// A question. `language` defaults to English when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AskReq {
    pub question: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AskRes {
    pub reply: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSessionRes {
    pub session_id: String,
}

/// One line of a conversation. `speaker` is `You` or `Chatbot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub speaker: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionAskRes {
    pub reply: String,
    pub language: Language,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRes {
    pub session_id: String,
    pub entries: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_req_defaults_to_english() {
        let req: AskReq = serde_json::from_str(r#"{"question":"dengue"}"#).unwrap();
        assert_eq!(req.language, Language::En);
    }

    #[test]
    fn test_ask_req_rejects_unknown_language() {
        let res = serde_json::from_str::<AskReq>(r#"{"question":"dengue","language":"fr"}"#);
        assert!(res.is_err());
    }
}
