use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use notable_core::{NotableError, PersonName};

/// A raw person record from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomUser {
    pub first: String,
    pub last: String,
    /// `None` when the record had no parseable date of birth.
    pub birth_year: Option<i32>,
}

impl RandomUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    pub fn person_name(&self) -> Result<PersonName, NotableError> {
        PersonName::new(self.first.as_str(), self.last.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserSourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error: API returned status code {0}")]
    Status(u16),
}

/// Anything that can hand out a batch of random people.
#[async_trait]
pub trait PersonSource: Send + Sync {
    async fn fetch(&self, count: usize) -> Result<Vec<RandomUser>, UserSourceError>;
}
