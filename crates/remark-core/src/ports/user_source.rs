use async_trait::async_trait;

use crate::domain::RandomIdentity;

/// Source of generated identities used to seed the user table.
#[async_trait]
pub trait RandomUserSource: Send + Sync {
    /// Fetch `count` identities. Fails as a whole if any single fetch fails.
    async fn fetch(&self, count: usize) -> Result<Vec<RandomIdentity>, UserSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UserSourceError {
    #[error("Random user request failed: {0}")]
    Request(String),

    #[error("Unexpected random user response: {0}")]
    Malformed(String),
}
