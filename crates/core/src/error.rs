use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{}", crate::constants::EMPTY_QUESTION_WARNING)]
    EmptyQuestion,
    #[error("question exceeds maximum length of {max} characters")]
    QuestionTooLong { max: usize },
    #[error("session limit of {max} reached")]
    SessionLimitReached { max: usize },
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),
    #[error("translation error: {0}")]
    Translation(#[from] healthbot_translate::TranslateError),
}

pub type ChatResult<T> = std::result::Result<T, ChatError>;
