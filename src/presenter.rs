//! The contract between the quiz controller and whatever displays it.

use crate::models::{Category, Difficulty, QuestionKind, SettingsDraft};
use crate::rank::QuizResult;
use crate::session::AnswerRecord;

/// Coarse state of the quiz, as seen from outside the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Categories not loaded yet.
    Idle,
    /// Waiting on the trivia source.
    Loading,
    /// Settings form is active.
    Configuring,
    /// A question is shown and awaits an answer.
    InProgress,
    /// The current question has been answered, waiting for "next".
    Answered,
    /// All questions answered, result shown.
    Finished,
}

/// What a fetch in flight is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingKind {
    Categories,
    Questions,
}

/// Reveal state of one answer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Hidden,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub text: String,
    pub mark: ChoiceMark,
    pub picked: bool,
}

/// The question currently on screen, fully decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub category: String,
    pub difficulty: Option<Difficulty>,
    pub kind: QuestionKind,
    pub choices: Vec<ChoiceView>,
    /// Set once answered: whether the pick was right.
    pub outcome: Option<bool>,
}

/// Snapshot handed to the presenter after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub phase: Phase,
    pub loading: Option<LoadingKind>,
    pub categories: Vec<Category>,
    pub can_start: bool,
    pub question: Option<QuestionView>,
    pub score: usize,
    pub result: Option<QuizResult>,
    pub history: Vec<AnswerRecord>,
    pub error: Option<String>,
    pub confirming_quit: bool,
}

/// Discrete user intents forwarded to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start(SettingsDraft),
    SelectAnswer(String),
    Next,
    Reset,
    RequestQuit,
    ConfirmQuit(bool),
    Retry,
    DismissError,
}

/// Receives a fresh [`QuizView`] whenever the controller changes state.
pub trait Presenter {
    fn present(&mut self, view: &QuizView);
}

/// Presenter that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _view: &QuizView) {}
}
