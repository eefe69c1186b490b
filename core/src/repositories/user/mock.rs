//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository backed by a HashMap keyed by user id
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a user directly, bypassing signup
    pub async fn seed(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "An account with this email already exists".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.values_mut().find(|u| u.email == email) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                user.name = name.to_string();
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str) -> User {
        User::new("Admin".to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let repo = MockUserRepository::new();
        let user = sample_user("admin@example.com");

        repo.insert(user.clone()).await.unwrap();

        let found = repo.find_by_email("admin@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = MockUserRepository::new();
        repo.insert(sample_user("admin@example.com")).await.unwrap();

        let result = repo.insert(sample_user("admin@example.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let repo = MockUserRepository::new();
        repo.insert(sample_user("admin@example.com")).await.unwrap();

        assert!(repo
            .update_password_hash("admin@example.com", "new_hash")
            .await
            .unwrap());
        assert!(!repo
            .update_password_hash("nobody@example.com", "new_hash")
            .await
            .unwrap());

        let user = repo.find_by_email("admin@example.com").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "new_hash");
    }

    #[tokio::test]
    async fn test_update_name() {
        let repo = MockUserRepository::new();
        let user = sample_user("admin@example.com");
        let id = user.id;
        repo.insert(user).await.unwrap();

        let renamed = repo.update_name(id, "New Name").await.unwrap().unwrap();
        assert_eq!(renamed.name, "New Name");

        assert!(repo.update_name(Uuid::new_v4(), "x").await.unwrap().is_none());
    }
}
