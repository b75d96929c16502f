use chrono::{DateTime, Utc};

pub type UserId = i32;

/// User entity. `password_hash` never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A user ready to be persisted. The password is hashed already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
}

/// An identity fetched from a random-user generator, used to seed users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomIdentity {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RandomIdentity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
