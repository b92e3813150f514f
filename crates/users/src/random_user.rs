//! randomuser.me client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use notable_core::config::RandomUserConfig;

use crate::source::{PersonSource, RandomUser, UserSourceError};

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: ApiName,
    #[serde(default)]
    dob: Option<ApiDob>,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct ApiDob {
    #[serde(default)]
    date: String,
}

impl From<ApiUser> for RandomUser {
    fn from(user: ApiUser) -> Self {
        let birth_year = user.dob.as_ref().and_then(|dob| birth_year(&dob.date));
        Self {
            first: title_case(&user.name.first),
            last: title_case(&user.name.last),
            birth_year,
        }
    }
}

pub struct RandomUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl RandomUserClient {
    pub fn new(config: &RandomUserConfig) -> Result<Self, UserSourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PersonSource for RandomUserClient {
    async fn fetch(&self, count: usize) -> Result<Vec<RandomUser>, UserSourceError> {
        let url = format!("{}/", self.base_url);
        debug!(%url, count, "fetching random users");

        let response = self
            .client
            .get(&url)
            .query(&[("results", count)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserSourceError::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        let users: Vec<RandomUser> = body.results.into_iter().map(RandomUser::from).collect();
        info!(fetched = users.len(), "random users fetched");
        Ok(users)
    }
}

/// Leading four digits of an ISO-8601 date.
fn birth_year(date: &str) -> Option<i32> {
    date.get(..4)
        .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
        .and_then(|y| y.parse().ok())
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
