//! # Healthbot Core
//!
//! Core logic for the disease-information chatbot.
//!
//! This crate contains the question answering pipeline:
//! - A fixed knowledge base of disease facts (`knowledge`)
//! - Keyword-based intent resolution over that knowledge base (`intent`)
//! - Reply translation with a failure-marked fallback (`chat`)
//! - Append-only, in-memory conversation sessions (`session`)
//!
//! **No API concerns**: HTTP servers, request/response shapes and terminal handling belong in
//! `api-rest`, `api-shared` or `healthbot-cli`.

pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod session;
pub mod validation;

pub use chat::ChatService;
pub use config::CoreConfig;
pub use constants::*;
pub use error::{ChatError, ChatResult};
pub use healthbot_types::{Language, NonEmptyText, TextError};
pub use intent::{get_response, resolve, Intent};
pub use knowledge::{Field, KnowledgeBase, Topic};
pub use session::{ConversationEntry, SessionHistory, SessionStore, Speaker};
