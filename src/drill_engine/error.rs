use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("invalid deck: {0}")]
    InvalidDeck(String),
    #[error("insufficient deck diversity: {0}")]
    InsufficientDeckDiversity(String),
    #[error("could not generate {wanted} distractors in {attempts} attempts")]
    GenerationExhausted { wanted: usize, attempts: usize },
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

pub type Result<T> = std::result::Result<T, DrillError>;
