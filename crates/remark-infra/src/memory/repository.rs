use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use remark_core::domain::{Comment, CommentId, NewComment, NewUser, Page, User, UserId};
use remark_core::error::RepoError;
use remark_core::ports::{BaseRepository, CommentRepository, UserRepository};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// Process-local table keyed by an autoincrementing id.
///
/// Ids start at 1 and are never reused, matching SQLite `AUTOINCREMENT`.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

pub type InMemoryCommentRepository = InMemoryRepository<Comment>;
pub type InMemoryUserRepository = InMemoryRepository<User>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    async fn insert_with(&self, build: impl FnOnce(i32) -> T) -> Result<T, RepoError>
    where
        T: Clone,
    {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("id space exhausted".into()))?;

        let row = build(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, i32> for InMemoryRepository<T>
where
    T: Clone + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository<Comment> {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let content = comment.into_content();
        self.insert_with(|id: CommentId| Comment {
            id,
            content,
            created_at: Utc::now(),
        })
        .await
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Comment>, RepoError> {
        let table = self.table.read().await;
        let skip = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit).unwrap_or(usize::MAX);

        Ok(table.rows.values().rev().skip(skip).take(take).cloned().collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        self.insert_with(|id: UserId| User {
            id,
            name: user.name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}
