//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect};

use remark_core::domain::{Comment, NewComment, NewUser, Page, User};
use remark_core::error::RepoError;
use remark_core::ports::{CommentRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sqlite_base::{SqliteBaseRepository, repo_error};

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteBaseRepository<CommentEntity>;

/// SQLite user repository.
pub type SqliteUserRepository = SqliteBaseRepository<UserEntity>;

/// SQLite binds LIMIT/OFFSET as signed 64-bit integers.
fn clamp(value: u64) -> u64 {
    value.min(i64::MAX as u64)
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(comment)
            .insert(&*self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(comment_id = model.id, "Comment stored");
        Ok(model.into())
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Comment>, RepoError> {
        let rows = CommentEntity::find()
            .order_by_desc(comment::Column::Id)
            .limit(clamp(page.limit))
            .offset(clamp(page.offset))
            .all(&*self.db)
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(user)
            .insert(&*self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(user_id = model.id, "User stored");
        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let rows = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
