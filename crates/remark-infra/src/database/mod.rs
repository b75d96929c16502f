//! SQLite storage via SeaORM.

mod connections;
mod sqlite_base;
mod sqlite_repo;

pub mod entity;

pub use connections::{DatabaseConfig, SqliteStore, sync_schema};
pub use sqlite_base::SqliteBaseRepository;
pub use sqlite_repo::{SqliteCommentRepository, SqliteUserRepository};
