//! Data for one quiz attempt.

use rand::Rng;

use crate::models::Question;
use crate::shuffle::shuffled_choices;
use crate::text;

/// How a single question was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: String,
    pub picked: String,
    pub correct: String,
    pub is_correct: bool,
}

/// Questions, position and score of the running quiz.
///
/// `current` always points into `questions`, and `score` never exceeds the
/// number of questions answered so far.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    answered: bool,
    choices: Vec<String>,
    picked: Option<usize>,
    history: Vec<AnswerRecord>,
}

impl Session {
    /// Start at the first question. Returns `None` for an empty batch.
    pub fn new<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Option<Self> {
        let choices = shuffled_choices(questions.first()?, rng);
        Some(Self {
            history: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            score: 0,
            answered: false,
            choices,
            picked: None,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Decoded answers of the current question in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Position in [`Session::choices`] the user picked, once answered.
    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Decoded correct answer of the current question.
    pub fn correct_answer(&self) -> String {
        text::decode(&self.current_question().correct_answer).into_owned()
    }

    /// Record `choice` for the current question.
    ///
    /// Returns `None` without touching the score when the question was
    /// already answered, otherwise whether the choice was right.
    pub fn answer(&mut self, choice: &str) -> Option<bool> {
        if self.answered {
            return None;
        }

        let correct = self.correct_answer();
        let is_correct = choice == correct;
        if is_correct {
            self.score += 1;
        }

        self.answered = true;
        self.picked = self.choices.iter().position(|c| c == choice);
        self.history.push(AnswerRecord {
            question: text::decode(&self.current_question().text).into_owned(),
            picked: choice.to_string(),
            correct,
            is_correct,
        });

        Some(is_correct)
    }

    /// Move to the next question and shuffle its answers.
    ///
    /// Returns `false` if the current question is unanswered or the last one.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.answered || self.is_last() {
            return false;
        }

        self.current += 1;
        self.answered = false;
        self.picked = None;
        self.choices = shuffled_choices(&self.questions[self.current], rng);
        true
    }
}
