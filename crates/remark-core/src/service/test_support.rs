//! Hand-rolled port fakes for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Comment, CommentId, NewComment, NewUser, Page, RandomIdentity, User, UserId};
use crate::error::RepoError;
use crate::ports::{
    BaseRepository, CommentRepository, PasswordError, PasswordService, RandomUserSource,
    UserRepository, UserSourceError,
};

#[derive(Default)]
pub struct FakeComments {
    rows: Mutex<Vec<Comment>>,
}

impl FakeComments {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Comment, CommentId> for FakeComments {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: CommentId) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.len() as u64)
    }
}

#[async_trait]
impl CommentRepository for FakeComments {
    async fn create(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let stored = Comment {
            id: rows.len() as CommentId + 1,
            content: comment.into_content(),
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Comment>, RepoError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }
}

/// Every call fails the way a broken database would.
pub struct FailingComments;

#[async_trait]
impl BaseRepository<Comment, CommentId> for FailingComments {
    async fn find_by_id(&self, _id: CommentId) -> Result<Option<Comment>, RepoError> {
        Err(RepoError::Query("database is locked".into()))
    }

    async fn delete(&self, _id: CommentId) -> Result<(), RepoError> {
        Err(RepoError::Query("database is locked".into()))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Err(RepoError::Query("database is locked".into()))
    }
}

#[async_trait]
impl CommentRepository for FailingComments {
    async fn create(&self, _comment: NewComment) -> Result<Comment, RepoError> {
        Err(RepoError::Query("database is locked".into()))
    }

    async fn find_page(&self, _page: Page) -> Result<Vec<Comment>, RepoError> {
        Err(RepoError::Query("database is locked".into()))
    }
}

#[derive(Default)]
pub struct FakeUsers {
    rows: Mutex<Vec<User>>,
}

impl FakeUsers {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<User, UserId> for FakeUsers {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn delete(&self, id: UserId) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.len() as u64)
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let stored = User {
            id: rows.len() as UserId + 1,
            name: user.name,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Reversible stand-in for a real hash.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(password.chars().rev().collect())
    }
}

#[derive(Default)]
pub struct FakeIdentities {
    names: Vec<(String, String)>,
    fail: bool,
}

impl FakeIdentities {
    pub fn with_names(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(first, last)| (first.to_string(), last.to_string()))
                .collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            names: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl RandomUserSource for FakeIdentities {
    async fn fetch(&self, count: usize) -> Result<Vec<RandomIdentity>, UserSourceError> {
        if self.fail {
            return Err(UserSourceError::Request("connection refused".into()));
        }
        Ok(self
            .names
            .iter()
            .take(count)
            .map(|(first, last)| RandomIdentity {
                first_name: first.clone(),
                last_name: last.clone(),
                password: format!("{first}-secret"),
            })
            .collect())
    }
}
