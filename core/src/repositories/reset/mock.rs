//! In-memory implementation of ResetTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::PasswordResetToken;
use crate::errors::DomainError;

use super::r#trait::ResetTokenRepository;

/// Mock reset token repository backed by a HashMap
pub struct MockResetTokenRepository {
    tokens: Arc<RwLock<HashMap<String, PasswordResetToken>>>,
}

impl MockResetTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// All rows for an email, newest first; test helper
    pub async fn tokens_for_email(&self, email: &str) -> Vec<PasswordResetToken> {
        let tokens = self.tokens.read().await;
        let mut rows: Vec<_> = tokens
            .values()
            .filter(|t| t.email == email)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

impl Default for MockResetTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetTokenRepository for MockResetTokenRepository {
    async fn insert_token(&self, token: PasswordResetToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(DomainError::internal("duplicate reset token value"));
        }

        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn mark_used(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token) {
            Some(row) => {
                row.used = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_used_for_email(&self, email: &str) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for row in tokens.values_mut() {
            if row.email == email && !row.used {
                row.used = true;
                count += 1;
            }
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MockResetTokenRepository::new();
        let token = PasswordResetToken::new("a@x.com".to_string(), "t1".to_string());

        repo.insert_token(token.clone()).await.unwrap();

        assert_eq!(repo.find_by_token("t1").await.unwrap(), Some(token));
        assert!(repo.find_by_token("t2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_used() {
        let repo = MockResetTokenRepository::new();
        repo.insert_token(PasswordResetToken::new("a@x.com".to_string(), "t1".to_string()))
            .await
            .unwrap();

        assert!(repo.mark_used("t1").await.unwrap());
        assert!(!repo.mark_used("missing").await.unwrap());

        let row = repo.find_by_token("t1").await.unwrap().unwrap();
        assert!(row.used);
        assert!(!row.is_usable());
    }

    #[tokio::test]
    async fn test_mark_all_used_for_email_spares_other_emails() {
        let repo = MockResetTokenRepository::new();
        repo.insert_token(PasswordResetToken::new("a@x.com".to_string(), "t1".to_string()))
            .await
            .unwrap();
        repo.insert_token(PasswordResetToken::new("a@x.com".to_string(), "t2".to_string()))
            .await
            .unwrap();
        repo.insert_token(PasswordResetToken::new("b@x.com".to_string(), "t3".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.mark_all_used_for_email("a@x.com").await.unwrap(), 2);

        assert!(repo.find_by_token("t1").await.unwrap().unwrap().used);
        assert!(repo.find_by_token("t2").await.unwrap().unwrap().used);
        assert!(!repo.find_by_token("t3").await.unwrap().unwrap().used);
    }
}
