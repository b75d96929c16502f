use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::SanitizedContent;

pub type CommentId = i32;

/// A stored comment. `content` is already HTML-entity encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment ready to be persisted; storage assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    content: SanitizedContent,
}

impl NewComment {
    pub fn new(content: SanitizedContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn into_content(self) -> String {
        self.content.into_inner()
    }
}
