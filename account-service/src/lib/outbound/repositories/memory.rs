use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AuthError;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::User;
use crate::domain::account::ports::UserRepository;

/// Process-local user store keyed by normalized email.
///
/// Uniqueness is checked and the insert applied under a single write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<EmailAddress, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, AuthError> {
        Ok(self.users.read().await.contains_key(email))
    }

    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn add(&self, user: &User) -> Result<(), AuthError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(AuthError::EmailAlreadyRegistered(user.email.to_string()));
        }

        users.insert(user.email.clone(), user.clone());
        tracing::debug!(user_id = %user.id, "User stored in memory");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::account::models::UserId;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email),
            password_hash: "$argon2id$hash".to_string(),
            password_salt: "salt".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_and_get_by_email() {
        let repository = InMemoryUserRepository::new();
        let stored = user("bob@test.com");

        repository.add(&stored).await.expect("Failed to add user");

        let found = repository
            .get_by_email(&EmailAddress::new("BOB@test.com"))
            .await
            .expect("Lookup failed");
        assert_eq!(found, Some(stored));
        assert!(repository
            .exists_by_email(&EmailAddress::new("bob@test.com"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_email() {
        let repository = InMemoryUserRepository::new();

        let found = repository
            .get_by_email(&EmailAddress::new("ghost@test.com"))
            .await
            .expect("Lookup failed");
        assert!(found.is_none());
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_add_duplicate_email_rejected() {
        let repository = InMemoryUserRepository::new();

        repository
            .add(&user("a@x.com"))
            .await
            .expect("Failed to add user");
        let result = repository.add(&user("A@x.com")).await;

        assert_eq!(
            result.unwrap_err(),
            AuthError::EmailAlreadyRegistered("a@x.com".to_string())
        );
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_store_one_user() {
        let repository = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.add(&user("race@test.com")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.expect("Task panicked").is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repository.len().await, 1);
    }
}
