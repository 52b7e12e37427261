//! HTTP binding for the Open Trivia Database.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::TriviaSource;
use crate::error::{QuizError, Result};
use crate::models::{Category, Difficulty, Question};

pub const DEFAULT_API_URL: &str = "https://opentdb.com";

const RESPONSE_OK: u8 = 0;
const RESPONSE_NO_RESULTS: u8 = 1;

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    trivia_categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<Question>,
}

/// Client for `api_category.php` and `api.php`.
#[derive(Debug, Clone)]
pub struct OpenTriviaDb {
    http: Client,
    base_url: String,
}

impl OpenTriviaDb {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TriviaSource for OpenTriviaDb {
    async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let body: CategoriesResponse = self
            .http
            .get(format!("{}/api_category.php", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = body.trivia_categories.len(), "fetched categories");
        Ok(body.trivia_categories)
    }

    async fn fetch_questions(
        &self,
        category: Option<u32>,
        difficulty: Difficulty,
        count: u32,
    ) -> Result<Vec<Question>> {
        let mut query: Vec<(&str, String)> = vec![("amount", count.to_string())];
        if let Some(id) = category {
            query.push(("category", id.to_string()));
        }
        if let Some(level) = difficulty.as_query() {
            query.push(("difficulty", level.to_string()));
        }

        let body: QuestionsResponse = self
            .http
            .get(format!("{}/api.php", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match body.response_code {
            RESPONSE_OK => {
                debug!(count = body.results.len(), "fetched questions");
                Ok(body.results)
            }
            RESPONSE_NO_RESULTS => Err(QuizError::NoQuestionsAvailable),
            code => {
                warn!(code, "trivia API refused question request");
                Err(QuizError::Api { code })
            }
        }
    }
}
