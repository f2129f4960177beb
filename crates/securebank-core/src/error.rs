use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Unknown button variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown button size: {0}")]
    UnknownSize(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
