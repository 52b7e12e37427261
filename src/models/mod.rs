mod question;
mod settings;

use serde::Deserialize;

pub use question::{Question, QuestionKind};
pub use settings::{
    DEFAULT_QUESTION_COUNT, Difficulty, MAX_QUESTION_COUNT, Settings, SettingsDraft,
};

/// A trivia category as listed by the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
