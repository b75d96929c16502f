//! SeaORM entities. Table layout matches the `comments` and `users` tables.

pub mod comment;
pub mod user;
