//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod password;
mod rate_limit;
mod repository;
mod user_source;

pub use password::{PasswordError, PasswordService};
pub use rate_limit::{RateLimitDecision, RateLimitError, RateLimiter};
pub use repository::{BaseRepository, CommentRepository, UserRepository};
pub use user_source::{RandomUserSource, UserSourceError};
