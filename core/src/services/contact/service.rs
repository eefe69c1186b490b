//! Contact message service implementation

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::contact::ContactMessage;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ContactFilter, ContactRepository};

/// Default page size for listings
const DEFAULT_PAGE_SIZE: u64 = 20;

/// Hard cap on page size
const MAX_PAGE_SIZE: u64 = 100;

/// Listing query as it arrives from the API layer
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub read: Option<bool>,
}

/// One page of contact messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<ContactMessage>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

/// A single month's message count for the dashboard chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    /// Label like "Aug 25"
    pub month: String,
    pub count: u64,
}

/// Direction-annotated trend line for a stat tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub text: String,
    pub positive: bool,
}

/// Trend lines for every stat tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTrends {
    pub total: Trend,
    pub this_month: Trend,
    pub unread: Trend,
    pub avg_per_day: Trend,
}

/// Dashboard statistics payload
#[derive(Debug, Clone, PartialEq)]
pub struct ContactStats {
    pub total: u64,
    pub this_month: u64,
    pub unread: u64,
    pub avg_per_day: f64,
    pub monthly_chart: Vec<MonthlyCount>,
    pub trends: StatTrends,
}

/// Service for contact message management and aggregation
pub struct ContactService<C: ContactRepository> {
    repository: Arc<C>,
}

impl<C: ContactRepository> ContactService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// List messages newest-first with pagination and filters
    pub async fn list(&self, query: ContactQuery) -> DomainResult<ContactPage> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = (page - 1) * limit;

        let filter = ContactFilter {
            search: query.search.filter(|s| !s.is_empty()),
            from: query.from,
            to: query.to,
            read: query.read,
        };

        let (contacts, total) = self.repository.list(&filter, offset, limit).await?;
        let total_pages = total.div_ceil(limit);

        Ok(ContactPage {
            contacts,
            total,
            page,
            total_pages,
        })
    }

    /// Fetch a single message
    pub async fn get(&self, id: Uuid) -> DomainResult<ContactMessage> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Contact".to_string(),
            })
    }

    /// Toggle the read flag on one message
    pub async fn set_read(&self, id: Uuid, read: bool) -> DomainResult<ContactMessage> {
        self.repository
            .set_read(id, read)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Contact".to_string(),
            })
    }

    /// Delete a message
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "Contact".to_string(),
            });
        }
        Ok(())
    }

    /// Flag many messages at once, returning the affected count
    pub async fn set_read_bulk(&self, ids: &[Uuid], read: bool) -> DomainResult<u64> {
        self.repository.set_read_bulk(ids, read).await
    }

    /// Dashboard statistics as of `now`
    ///
    /// `now` is a parameter so the calendar arithmetic is testable against
    /// fixed dates.
    pub async fn stats(&self, now: DateTime<Utc>) -> DomainResult<ContactStats> {
        let start_of_today = day_start(now);
        let start_of_month = months_back(now, 0);
        let start_of_last_month = months_back(now, 1);
        let end_of_last_month = start_of_month - Duration::milliseconds(1);
        let start_of_week = now - Duration::days(7);
        let chart_start = months_back(now, 11);

        let total = self.repository.count(&ContactFilter::default()).await?;
        let this_month = self.count_since(start_of_month).await?;
        let last_month = self
            .repository
            .count(&ContactFilter {
                from: Some(start_of_last_month),
                to: Some(end_of_last_month),
                ..Default::default()
            })
            .await?;
        let this_week = self.count_since(start_of_week).await?;
        let unread = self
            .repository
            .count(&ContactFilter {
                read: Some(false),
                ..Default::default()
            })
            .await?;
        let unread_today = self
            .repository
            .count(&ContactFilter {
                read: Some(false),
                from: Some(start_of_today),
                ..Default::default()
            })
            .await?;

        let avg_per_day = match self.repository.earliest_created_at().await? {
            Some(first) if total > 0 => {
                let days = ((now - first).num_seconds() as f64 / 86_400.0)
                    .ceil()
                    .max(1.0);
                round1(total as f64 / days)
            }
            _ => 0.0,
        };

        // Month-over-month comparisons use per-day averages so a partial
        // current month is not penalized against a full previous one.
        let this_month_avg = round1(this_month as f64 / now.day() as f64);
        let last_month_days = (start_of_month - start_of_last_month).num_days().max(1);
        let last_month_avg = if last_month > 0 {
            round1(last_month as f64 / last_month_days as f64)
        } else {
            0.0
        };

        let this_month_trend = percent_change(last_month as f64, this_month as f64);
        let avg_trend = percent_change(last_month_avg, this_month_avg);

        let trends = StatTrends {
            total: Trend {
                text: format!("+{} this week", this_week),
                positive: true,
            },
            this_month: Trend {
                text: format!("{} from last month", signed_percent(this_month_trend)),
                positive: this_month_trend >= 0,
            },
            unread: Trend {
                text: format!("{} new today", unread_today),
                positive: unread_today == 0,
            },
            avg_per_day: Trend {
                text: format!("{} from last month", signed_percent(avg_trend)),
                positive: avg_trend >= 0,
            },
        };

        let monthly_chart = self.monthly_chart(now, chart_start).await?;

        Ok(ContactStats {
            total,
            this_month,
            unread,
            avg_per_day,
            monthly_chart,
            trends,
        })
    }

    async fn count_since(&self, since: DateTime<Utc>) -> DomainResult<u64> {
        self.repository
            .count(&ContactFilter {
                from: Some(since),
                ..Default::default()
            })
            .await
    }

    /// Message counts bucketed into the trailing twelve calendar months
    async fn monthly_chart(
        &self,
        now: DateTime<Utc>,
        chart_start: DateTime<Utc>,
    ) -> DomainResult<Vec<MonthlyCount>> {
        let mut order = Vec::with_capacity(12);
        let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
        for i in (0..12).rev() {
            let label = month_label(months_back(now, i));
            order.push(label.clone());
            buckets.insert(label, 0);
        }

        for created_at in self.repository.created_since(chart_start).await? {
            let label = month_label(created_at);
            if let Some(count) = buckets.get_mut(&label) {
                *count += 1;
            }
        }

        Ok(order
            .into_iter()
            .map(|month| {
                let count = buckets.get(&month).copied().unwrap_or(0);
                MonthlyCount { month, count }
            })
            .collect())
    }
}

/// Midnight UTC of the given instant's date
fn day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Midnight UTC on the first of the month `months` before `now`
fn months_back(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let date = now.date_naive();
    let total = date.year() * 12 + date.month0() as i32 - months as i32;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;

    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("first day of a computed month is always a valid date")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Chart bucket label, e.g. "Aug 25"
fn month_label(at: DateTime<Utc>) -> String {
    at.format("%b %y").to_string()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Integer percent change; a rise from zero counts as +100%
fn percent_change(previous: f64, current: f64) -> i64 {
    if previous == 0.0 {
        if current > 0.0 {
            100
        } else {
            0
        }
    } else {
        (((current - previous) / previous) * 100.0).round() as i64
    }
}

fn signed_percent(value: i64) -> String {
    if value >= 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}
