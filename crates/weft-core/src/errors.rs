use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt family {0:?} is already registered")]
    DuplicateFamily(String),

    #[error("malformed chat message: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptError>;
