//! Comment use cases, including the ingestion pipeline entry point.

use std::sync::Arc;

use crate::domain::{Comment, CommentId, CommentPayload, NewComment, Page, SanitizedContent};
use crate::error::DomainError;
use crate::ports::CommentRepository;

/// Validates, encodes and stores comments; reads them back page by page.
///
/// Stateless apart from the repository handle, so one instance is shared by
/// every request.
#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    /// Ingest a raw payload and persist it as one row.
    ///
    /// Validation failures return before storage is touched.
    pub async fn submit(&self, payload: CommentPayload) -> Result<Comment, DomainError> {
        let content = SanitizedContent::ingest(payload)?;
        let comment = self.repo.create(NewComment::new(content)).await?;
        Ok(comment)
    }

    /// Newest-first page of comments.
    pub async fn list(&self, page: Page) -> Result<Vec<Comment>, DomainError> {
        Ok(self.repo.find_page(page).await?)
    }

    pub async fn get(&self, id: CommentId) -> Result<Comment, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("comment", id))
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.repo.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RepoError, ValidationError};
    use crate::service::test_support::{FailingComments, FakeComments};
    use serde_json::json;

    fn service() -> (CommentService, Arc<FakeComments>) {
        let repo = Arc::new(FakeComments::default());
        (CommentService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_submit_stores_encoded_content() {
        let (service, repo) = service();

        let comment = service
            .submit(CommentPayload::Text("  <i>hi</i> ".into()))
            .await
            .unwrap();

        assert_eq!(comment.id, 1);
        assert_eq!(comment.content, "&lt;i&gt;hi&lt;/i&gt;");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_without_touching_storage() {
        let (service, repo) = service();

        let err = service
            .submit(CommentPayload::Json(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::ContentRequired)
        ));

        let err = service
            .submit(CommentPayload::Text("x".repeat(501)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::ContentTooLong)
        ));

        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (service, _repo) = service();
        for text in ["A", "B", "C"] {
            service.submit(text.into()).await.unwrap();
        }

        let page = service.list(Page::new(2, 0)).await.unwrap();
        let contents: Vec<_> = page.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["C", "B"]);

        let rest = service.list(Page::new(2, 2)).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].content, "A");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (service, _repo) = service();
        assert!(service.list(Page::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _repo) = service();
        let err = service.get(42).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity_type: "comment",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = CommentService::new(Arc::new(FailingComments));

        let err = service.submit("hello".into()).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(RepoError::Query(_))));
    }
}
