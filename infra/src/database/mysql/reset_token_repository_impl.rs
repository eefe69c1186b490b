//! MySQL implementation of the ResetTokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ah_core::domain::entities::token::PasswordResetToken;
use ah_core::errors::DomainError;
use ah_core::repositories::ResetTokenRepository;

/// MySQL implementation of ResetTokenRepository
pub struct MySqlResetTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlResetTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a PasswordResetToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<PasswordResetToken, DomainError> {
        Ok(PasswordResetToken {
            token: row
                .try_get("token")
                .map_err(|e| DomainError::internal(format!("Failed to get token: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?,
            used: row
                .try_get("used")
                .map_err(|e| DomainError::internal(format!("Failed to get used: {}", e)))?,
        })
    }
}

#[async_trait]
impl ResetTokenRepository for MySqlResetTokenRepository {
    async fn insert_token(&self, token: PasswordResetToken) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO password_reset_tokens (token, email, created_at, expires_at, used)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(&token.email)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.used)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to save reset token: {}", e)))?;

        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let query = r#"
            SELECT token, email, created_at, expires_at, used
            FROM password_reset_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find reset token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, token: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE password_reset_tokens SET used = TRUE WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to mark token used: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_used_for_email(&self, email: &str) -> Result<usize, DomainError> {
        let result = sqlx::query(
            "UPDATE password_reset_tokens SET used = TRUE WHERE email = ? AND used = FALSE",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to supersede reset tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
