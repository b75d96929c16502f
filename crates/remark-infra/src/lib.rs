//! # Remark Infrastructure
//!
//! Concrete implementations of the ports defined in `remark-core`:
//! SQLite storage, in-memory storage, password hashing, rate limiting and
//! the random-user HTTP client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory storage only
//! - `sqlite` - SQLite storage via SeaORM
//! - `rate-limit` - Per-client rate limiting via governor

pub mod auth;
pub mod memory;
pub mod random_user;

#[cfg(feature = "sqlite")]
pub mod database;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use auth::Argon2PasswordService;
pub use memory::{InMemoryCommentRepository, InMemoryUserRepository};
pub use random_user::{RandomUserClient, RandomUserConfig};

#[cfg(feature = "sqlite")]
pub use database::{DatabaseConfig, SqliteCommentRepository, SqliteStore, SqliteUserRepository};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
