//! Services - use cases composed from domain rules and ports.

mod comment;
mod user;

#[cfg(test)]
mod test_support;

pub use comment::CommentService;
pub use user::UserService;
