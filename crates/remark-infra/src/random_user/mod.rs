//! HTTP client for the randomuser.me generator.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::Deserialize;

use remark_core::domain::RandomIdentity;
use remark_core::ports::{RandomUserSource, UserSourceError};

#[derive(Debug, Clone)]
pub struct RandomUserConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for RandomUserConfig {
    fn default() -> Self {
        Self {
            url: "https://randomuser.me/api/".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Vec<RandomUserResult>,
}

#[derive(Debug, Deserialize)]
struct RandomUserResult {
    name: RandomUserName,
    login: RandomUserLogin,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserLogin {
    password: String,
}

/// Takes the first result of one response.
fn into_identity(response: RandomUserResponse) -> Result<RandomIdentity, UserSourceError> {
    let result = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| UserSourceError::Malformed("empty results".into()))?;

    Ok(RandomIdentity {
        first_name: result.name.first,
        last_name: result.name.last,
        password: result.login.password,
    })
}

/// Issues one request per identity, all concurrently.
pub struct RandomUserClient {
    client: reqwest::Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(config: RandomUserConfig) -> Result<Self, UserSourceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UserSourceError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url,
        })
    }

    async fn fetch_one(&self) -> Result<RandomIdentity, UserSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| UserSourceError::Request(e.to_string()))?
            .json::<RandomUserResponse>()
            .await
            .map_err(|e| UserSourceError::Malformed(e.to_string()))?;

        into_identity(response)
    }
}

#[async_trait]
impl RandomUserSource for RandomUserClient {
    async fn fetch(&self, count: usize) -> Result<Vec<RandomIdentity>, UserSourceError> {
        let identities = try_join_all((0..count).map(|_| self.fetch_one())).await?;
        tracing::debug!(count = identities.len(), "Fetched random identities");
        Ok(identities)
    }
}
