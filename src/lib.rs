//! # trivia-quiz
//!
//! A terminal trivia quiz backed by the Open Trivia Database.
//!
//! The heart of the crate is [`QuizController`], a state machine that walks
//! through settings, the question loop, scoring and reset. It talks to a
//! [`TriviaSource`] for data and tells a [`Presenter`] about every change, so
//! it can be driven without a terminal:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use trivia_quiz::{NullPresenter, OpenTriviaDb, QuizController, QuizError, SettingsDraft};
//!
//! # async fn demo() -> Result<(), QuizError> {
//! let source = OpenTriviaDb::new("https://opentdb.com", Duration::from_secs(10))?;
//! let mut quiz = QuizController::new(Arc::new(source), NullPresenter);
//!
//! quiz.load_categories().await;
//! quiz.start_quiz(SettingsDraft::default()).await;
//!
//! if let Some(question) = quiz.view().question {
//!     quiz.submit_answer(&question.choices[0].text);
//!     quiz.advance();
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod presenter;
pub mod rank;
pub mod session;
pub mod shuffle;
pub mod source;
pub mod terminal;
pub mod text;
mod ui;

pub use config::Config;
pub use controller::{FetchOutcome, FetchRequest, FetchTicket, QuizController};
pub use error::QuizError;
pub use models::{Category, Difficulty, Question, Settings, SettingsDraft};
pub use presenter::{Intent, NullPresenter, Phase, Presenter, QuizView};
pub use rank::{QuizResult, Rank};
pub use source::{OpenTriviaDb, TriviaSource};
