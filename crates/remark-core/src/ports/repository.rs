use async_trait::async_trait;

use crate::domain::{Comment, CommentId, NewComment, NewUser, Page, User, UserId};
use crate::error::RepoError;

/// Operations every stored entity supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Comment storage. Rows are only ever inserted through [`NewComment`],
/// so stored content is always sanitized.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, CommentId> {
    /// Insert one row; storage assigns `id` and `created_at`.
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Comments newest-first (descending id), windowed by `page`.
    async fn find_page(&self, page: Page) -> Result<Vec<Comment>, RepoError>;
}

/// User storage.
#[async_trait]
pub trait UserRepository: BaseRepository<User, UserId> {
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// All users, ascending by id.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;
}
