use std::fmt;

use serde::Deserialize;
use tracing::warn;

use super::Category;

/// Number of questions used when the user did not pick one.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// Largest batch the trivia API will hand out in one request.
pub const MAX_QUESTION_COUNT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Any,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Value for the `difficulty` query parameter, `None` for any.
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
            Difficulty::Any => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Any => "Any Difficulty",
        };
        f.write_str(label)
    }
}

/// Raw selections coming from the settings form. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub question_count: Option<u32>,
}

/// Fully resolved quiz configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    category: Option<u32>,
    difficulty: Difficulty,
    question_count: u32,
}

impl Settings {
    pub fn new(category: Option<u32>, difficulty: Difficulty, question_count: u32) -> Self {
        Self {
            category,
            difficulty,
            question_count: question_count.clamp(1, MAX_QUESTION_COUNT),
        }
    }

    /// Fill in every unset or unusable selection with its default.
    ///
    /// A category id that is not in `categories` falls back to any category,
    /// and the count is clamped into `1..=MAX_QUESTION_COUNT`.
    pub fn resolve(draft: &SettingsDraft, categories: &[Category]) -> Self {
        let category = draft.category.filter(|id| {
            let known = categories.iter().any(|c| c.id == *id);
            if !known {
                warn!(category = id, "unknown category selected, using any category");
            }
            known
        });

        let question_count = match draft.question_count {
            Some(count) if (1..=MAX_QUESTION_COUNT).contains(&count) => count,
            Some(count) => {
                warn!(count, "question count out of range, clamping");
                count.clamp(1, MAX_QUESTION_COUNT)
            }
            None => DEFAULT_QUESTION_COUNT,
        };

        Self {
            category,
            difficulty: draft.difficulty.unwrap_or_default(),
            question_count,
        }
    }

    pub fn category(&self) -> Option<u32> {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(None, Difficulty::Any, DEFAULT_QUESTION_COUNT)
    }
}
