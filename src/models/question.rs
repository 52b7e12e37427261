use serde::Deserialize;

use super::Difficulty;

/// Whether a question offers four choices or a true/false pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

/// A single trivia question as delivered by the source.
///
/// All text fields are kept exactly as received, which for Open Trivia DB
/// means HTML-entity encoded. Use [`crate::text::decode`] before showing or
/// comparing them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: QuestionKind,
}

fn default_kind() -> QuestionKind {
    QuestionKind::Multiple
}

impl Question {
    /// Build a multiple choice question with no category metadata.
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let incorrect_answers: Vec<String> =
            incorrect_answers.into_iter().map(Into::into).collect();
        let kind = if incorrect_answers.len() == 1 {
            QuestionKind::Boolean
        } else {
            QuestionKind::Multiple
        };

        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: String::new(),
            difficulty: None,
            kind,
        }
    }

    /// Every answer, correct one first, still encoded.
    pub fn all_answers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.correct_answer.as_str())
            .chain(self.incorrect_answers.iter().map(String::as_str))
    }
}
