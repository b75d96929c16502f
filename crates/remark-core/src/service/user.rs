//! User use cases: listing, lookup and seeding from a random-user source.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{NewUser, User, UserId};
use crate::error::{DomainError, ValidationError};
use crate::ports::{PasswordService, RandomUserSource, UserRepository};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    source: Arc<dyn RandomUserSource>,
}

impl UserService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        source: Arc<dyn RandomUserSource>,
    ) -> Self {
        Self {
            repo,
            passwords,
            source,
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", id))
    }

    /// Look a user up by an untyped `id` taken from a request body.
    pub async fn lookup(&self, id: Option<&Value>) -> Result<User, DomainError> {
        let id = parse_user_id(id)?;
        self.get(id).await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.repo.count().await?)
    }

    /// Hash `password` and store a new user.
    pub async fn create(&self, name: String, password: &str) -> Result<User, DomainError> {
        let password_hash = self.passwords.hash(password)?;
        let user = self
            .repo
            .create(NewUser {
                name,
                password_hash,
            })
            .await?;
        Ok(user)
    }

    /// Fetch `count` random identities and store them as users.
    ///
    /// Nothing is inserted unless every fetch succeeded.
    pub async fn populate(&self, count: usize) -> Result<Vec<User>, DomainError> {
        let identities = self.source.fetch(count).await?;

        let mut created = Vec::with_capacity(identities.len());
        for identity in identities {
            let user = self.create(identity.full_name(), &identity.password).await?;
            created.push(user);
        }
        Ok(created)
    }
}

/// Accepts an integer or an integer-valued string. A numeric zero counts as
/// a missing id, as it does for older clients; the string `"0"` does not.
fn parse_user_id(raw: Option<&Value>) -> Result<UserId, ValidationError> {
    match raw {
        None | Some(Value::Null) => Err(ValidationError::UserIdRequired),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ValidationError::UserIdRequired),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|id| UserId::try_from(id).ok())
            .ok_or(ValidationError::InvalidId("user")),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::UserIdRequired),
        Some(Value::String(s)) => s
            .trim()
            .parse::<UserId>()
            .map_err(|_| ValidationError::InvalidId("user")),
        Some(_) => Err(ValidationError::InvalidId("user")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{FakeIdentities, FakeUsers, PlainPasswords};
    use serde_json::json;

    fn service(source: FakeIdentities) -> (UserService, Arc<FakeUsers>) {
        let repo = Arc::new(FakeUsers::default());
        let service = UserService::new(repo.clone(), Arc::new(PlainPasswords), Arc::new(source));
        (service, repo)
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(Some(&json!(3))), Ok(3));
        assert_eq!(parse_user_id(Some(&json!("12"))), Ok(12));
        assert_eq!(parse_user_id(None), Err(ValidationError::UserIdRequired));
        assert_eq!(
            parse_user_id(Some(&json!(0))),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(
            parse_user_id(Some(&json!(0.0))),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(parse_user_id(Some(&json!("0"))), Ok(0));
        assert_eq!(
            parse_user_id(Some(&Value::Null)),
            Err(ValidationError::UserIdRequired)
        );
        assert_eq!(
            parse_user_id(Some(&json!("abc"))),
            Err(ValidationError::InvalidId("user"))
        );
        assert_eq!(
            parse_user_id(Some(&json!(1.5))),
            Err(ValidationError::InvalidId("user"))
        );
        assert_eq!(
            parse_user_id(Some(&json!(i64::MAX))),
            Err(ValidationError::InvalidId("user"))
        );
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let (service, _repo) = service(FakeIdentities::default());

        let user = service.create("Ada Lovelace".into(), "hunter2").await.unwrap();

        assert_eq!(user.name, "Ada Lovelace");
        assert_ne!(user.password_hash, "hunter2");
        assert_eq!(user.password_hash, PlainPasswords.hash("hunter2").unwrap());
    }

    #[tokio::test]
    async fn test_populate_inserts_every_identity() {
        let (service, repo) = service(FakeIdentities::with_names(&[
            ("Ada", "Lovelace"),
            ("Alan", "Turing"),
        ]));

        let users = service.populate(2).await.unwrap();

        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_populate_failure_inserts_nothing() {
        let (service, repo) = service(FakeIdentities::failing());

        let err = service.populate(3).await.unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_lookup() {
        let (service, _repo) = service(FakeIdentities::default());
        let created = service.create("Grace Hopper".into(), "cobol").await.unwrap();

        let found = service.lookup(Some(&json!(created.id))).await.unwrap();
        assert_eq!(found, created);

        let missing = service.lookup(Some(&json!(99))).await.unwrap_err();
        assert!(matches!(
            missing,
            DomainError::NotFound {
                entity_type: "user",
                id: 99
            }
        ));

        let invalid = service.lookup(Some(&json!("x"))).await.unwrap_err();
        assert!(matches!(
            invalid,
            DomainError::Validation(ValidationError::InvalidId("user"))
        ));
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let (service, _repo) = service(FakeIdentities::default());
        service.create("B".into(), "pw").await.unwrap();
        service.create("A".into(), "pw").await.unwrap();

        let users = service.list().await.unwrap();
        assert_eq!(users[0].name, "B");
        assert_eq!(users[1].name, "A");
        assert_eq!(service.count().await.unwrap(), 2);
    }
}
