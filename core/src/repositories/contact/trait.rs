//! Contact message repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::contact::ContactMessage;
use crate::errors::DomainError;

/// Filter applied to contact listings and counts
///
/// `from` and `to` bound `created_at` inclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring match against sender name or email
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub read: Option<bool>,
}

impl ContactFilter {
    /// Whether a message passes this filter
    pub fn matches(&self, message: &ContactMessage) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !message.name.to_lowercase().contains(&needle)
                && !message.email.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(from) = self.from {
            if message.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if message.created_at > to {
                return false;
            }
        }
        if let Some(read) = self.read {
            if message.read != read {
                return false;
            }
        }
        true
    }
}

/// Repository contract for contact message rows
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// A page of messages matching the filter, newest first, plus the total
    /// match count
    async fn list(
        &self,
        filter: &ContactFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError>;

    /// Find a message by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, DomainError>;

    /// Set the read flag, returning the updated row
    async fn set_read(&self, id: Uuid, read: bool)
        -> Result<Option<ContactMessage>, DomainError>;

    /// Delete a message, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Set the read flag on many rows at once, returning the affected count
    async fn set_read_bulk(&self, ids: &[Uuid], read: bool) -> Result<u64, DomainError>;

    /// Count messages matching the filter
    async fn count(&self, filter: &ContactFilter) -> Result<u64, DomainError>;

    /// Creation time of the oldest message, if any
    async fn earliest_created_at(&self) -> Result<Option<DateTime<Utc>>, DomainError>;

    /// Creation timestamps of every message received since `since`
    ///
    /// Feeds the dashboard's monthly chart bucketing.
    async fn created_since(&self, since: DateTime<Utc>)
        -> Result<Vec<DateTime<Utc>>, DomainError>;
}
