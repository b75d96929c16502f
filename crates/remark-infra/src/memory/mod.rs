//! In-memory storage, used when no database is reachable and in tests.

mod repository;

pub use repository::{InMemoryCommentRepository, InMemoryRepository, InMemoryUserRepository};
