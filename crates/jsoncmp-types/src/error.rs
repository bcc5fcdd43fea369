use thiserror::Error;

/// Errors produced when parsing jsoncmp vocabulary from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown difference status: {0}")]
    UnknownStatus(String),

    #[error("unknown side: {0} (expected `old`/`left` or `new`/`right`)")]
    UnknownSide(String),
}
