//! Providers of categories and question batches.

mod opentdb;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Difficulty, Question};

pub use opentdb::{DEFAULT_API_URL, OpenTriviaDb};

/// Where categories and questions come from.
///
/// A successful but empty question list is a valid answer here; the
/// controller decides that it means "no questions available".
#[async_trait]
pub trait TriviaSource: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>>;

    async fn fetch_questions(
        &self,
        category: Option<u32>,
        difficulty: Difficulty,
        count: u32,
    ) -> Result<Vec<Question>>;
}
