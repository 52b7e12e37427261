use std::io;

use thiserror::Error;

/// Errors raised while running a quiz.
///
/// Only [`QuizError::Io`] ends the app; everything else is reported to the
/// presenter and the controller falls back to the state it came from.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Transport failure or a non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// The trivia API answered but refused the request.
    #[error("trivia API rejected the request (response code {code})")]
    Api { code: u8 },

    /// The request was valid but there are not enough questions for it.
    #[error("no questions for this configuration")]
    NoQuestionsAvailable,

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Network(err.to_string())
    }
}

pub type Result<T, E = QuizError> = std::result::Result<T, E>;
