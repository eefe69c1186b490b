//! In-memory implementation of RefreshTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository backed by a HashMap
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockRefreshTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored rows, expired or not
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn insert_token(&self, token: RefreshToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(DomainError::internal("duplicate refresh token value"));
        }

        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn delete_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token).is_some())
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.user_id != user_id);
        Ok(before - tokens.len())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired());
        Ok(before - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "value_1".to_string());

        repo.insert_token(token.clone()).await.unwrap();

        let found = repo.find_by_token("value_1").await.unwrap();
        assert_eq!(found, Some(token));
        assert!(repo.find_by_token("value_2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = MockRefreshTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "value_1".to_string());
        repo.insert_token(token).await.unwrap();

        assert!(repo.delete_token("value_1").await.unwrap());
        // Second delete of the same value loses.
        assert!(!repo.delete_token("value_1").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_all_for_user() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();

        for i in 0..3 {
            let token = RefreshToken::new(user_id, format!("mine_{}", i));
            repo.insert_token(token).await.unwrap();
        }
        let other = RefreshToken::new(Uuid::new_v4(), "theirs".to_string());
        repo.insert_token(other).await.unwrap();

        let removed = repo.delete_all_for_user(user_id).await.unwrap();
        assert_eq!(removed, 3);
        assert_eq!(repo.len().await, 1);
        assert!(repo.find_by_token("theirs").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_expired() {
        let repo = MockRefreshTokenRepository::new();
        let mut stale = RefreshToken::new(Uuid::new_v4(), "stale".to_string());
        stale.expires_at = chrono::Utc::now() - chrono::Duration::days(1);
        let fresh = RefreshToken::new(Uuid::new_v4(), "fresh".to_string());

        repo.insert_token(stale).await.unwrap();
        repo.insert_token(fresh).await.unwrap();

        assert_eq!(repo.delete_expired().await.unwrap(), 1);
        assert!(repo.find_by_token("stale").await.unwrap().is_none());
        assert!(repo.find_by_token("fresh").await.unwrap().is_some());
    }
}
