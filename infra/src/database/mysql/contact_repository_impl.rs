//! MySQL implementation of the ContactRepository trait.
//!
//! The listing and count queries share a dynamically assembled WHERE clause;
//! every user-supplied value goes through a bind parameter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use uuid::Uuid;

use ah_core::domain::entities::contact::ContactMessage;
use ah_core::errors::DomainError;
use ah_core::repositories::{ContactFilter, ContactRepository};

/// MySQL implementation of ContactRepository
pub struct MySqlContactRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, `read`, created_at";

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a ContactMessage entity
    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> Result<ContactMessage, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        Ok(ContactMessage {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid contact UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            subject: row
                .try_get("subject")
                .map_err(|e| DomainError::internal(format!("Failed to get subject: {}", e)))?,
            message: row
                .try_get("message")
                .map_err(|e| DomainError::internal(format!("Failed to get message: {}", e)))?,
            read: row
                .try_get("read")
                .map_err(|e| DomainError::internal(format!("Failed to get read flag: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }

    /// SQL conditions for the filter, in bind order
    fn filter_conditions(filter: &ContactFilter) -> Vec<&'static str> {
        let mut conditions = Vec::new();
        if filter.search.is_some() {
            conditions.push("(LOWER(name) LIKE ? OR LOWER(email) LIKE ?)");
        }
        if filter.from.is_some() {
            conditions.push("created_at >= ?");
        }
        if filter.to.is_some() {
            conditions.push("created_at <= ?");
        }
        if filter.read.is_some() {
            conditions.push("`read` = ?");
        }
        conditions
    }

    fn where_clause(filter: &ContactFilter) -> String {
        let conditions = Self::filter_conditions(filter);
        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }

    /// Bind the filter's values in the same order `filter_conditions` emits
    fn bind_filter<'q>(
        mut query: Query<'q, MySql, MySqlArguments>,
        filter: &'q ContactFilter,
    ) -> Query<'q, MySql, MySqlArguments> {
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.bind(pattern.clone()).bind(pattern);
        }
        if let Some(from) = filter.from {
            query = query.bind(from);
        }
        if let Some(to) = filter.to {
            query = query.bind(to);
        }
        if let Some(read) = filter.read {
            query = query.bind(read);
        }
        query
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn list(
        &self,
        filter: &ContactFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError> {
        let total = self.count(filter).await?;

        let sql = format!(
            "SELECT {} FROM contact_messages{} ORDER BY created_at DESC LIMIT ? OFFSET ?",
            CONTACT_COLUMNS,
            Self::where_clause(filter)
        );

        let query = Self::bind_filter(sqlx::query(&sql), filter)
            .bind(limit)
            .bind(offset);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list contacts: {}", e)))?;

        let mut contacts = Vec::with_capacity(rows.len());
        for row in &rows {
            contacts.push(Self::row_to_message(row)?);
        }

        Ok((contacts, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, DomainError> {
        let sql = format!(
            "SELECT {} FROM contact_messages WHERE id = ? LIMIT 1",
            CONTACT_COLUMNS
        );

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find contact: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_message(&row)?)),
            None => Ok(None),
        }
    }

    async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let result = sqlx::query("UPDATE contact_messages SET `read` = ? WHERE id = ?")
            .bind(read)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update read flag: {}", e)))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete contact: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_read_bulk(&self, ids: &[Uuid], read: bool) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "UPDATE contact_messages SET `read` = ? WHERE id IN ({})",
            placeholders
        );

        let mut query = sqlx::query(&sql).bind(read);
        for id in ids {
            query = query.bind(id.to_string());
        }

        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to bulk-update contacts: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn count(&self, filter: &ContactFilter) -> Result<u64, DomainError> {
        let sql = format!(
            "SELECT COUNT(*) AS total FROM contact_messages{}",
            Self::where_clause(filter)
        );

        let row = Self::bind_filter(sqlx::query(&sql), filter)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count contacts: {}", e)))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to read count: {}", e)))?;

        Ok(total as u64)
    }

    async fn earliest_created_at(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        let row = sqlx::query("SELECT MIN(created_at) AS earliest FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find earliest contact: {}", e)))?;

        row.try_get::<Option<DateTime<Utc>>, _>("earliest")
            .map_err(|e| DomainError::internal(format!("Failed to read earliest: {}", e)))
    }

    async fn created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, DomainError> {
        let rows = sqlx::query("SELECT created_at FROM contact_messages WHERE created_at >= ?")
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to load chart rows: {}", e)))?;

        let mut timestamps = Vec::with_capacity(rows.len());
        for row in &rows {
            timestamps.push(
                row.try_get::<DateTime<Utc>, _>("created_at")
                    .map_err(|e| DomainError::internal(format!("Failed to read created_at: {}", e)))?,
            );
        }

        Ok(timestamps)
    }
}
