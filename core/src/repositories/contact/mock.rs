//! In-memory implementation of ContactRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::contact::ContactMessage;
use crate::errors::DomainError;

use super::r#trait::{ContactFilter, ContactRepository};

/// Mock contact repository backed by a Vec
pub struct MockContactRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl MockContactRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seed a message directly
    pub async fn seed(&self, message: ContactMessage) {
        self.messages.write().await.push(message);
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(
        &self,
        filter: &ContactFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError> {
        let messages = self.messages.read().await;
        let mut matching: Vec<_> = messages.iter().filter(|m| filter.matches(m)).cloned().collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let mut messages = self.messages.write().await;
        match messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.read = read;
                Ok(Some(message.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() < before)
    }

    async fn set_read_bulk(&self, ids: &[Uuid], read: bool) -> Result<u64, DomainError> {
        let mut messages = self.messages.write().await;
        let mut count = 0;
        for message in messages.iter_mut() {
            if ids.contains(&message.id) {
                message.read = read;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn count(&self, filter: &ContactFilter) -> Result<u64, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().filter(|m| filter.matches(m)).count() as u64)
    }

    async fn earliest_created_at(&self) -> Result<Option<DateTime<Utc>>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().map(|m| m.created_at).min())
    }

    async fn created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .map(|m| m.created_at)
            .filter(|t| *t >= since)
            .collect())
    }
}
