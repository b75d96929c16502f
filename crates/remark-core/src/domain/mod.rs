//! Domain entities - the core business objects.

mod comment;
mod content;
mod page;
mod user;

pub use comment::{Comment, CommentId, NewComment};
pub use content::{CommentPayload, MAX_CONTENT_CHARS, SanitizedContent, encode_html};
pub use page::{DEFAULT_PAGE_LIMIT, Page};
pub use user::{NewUser, RandomIdentity, User, UserId};
