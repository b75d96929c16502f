//! Password hashing.

mod password;

pub use password::Argon2PasswordService;
