//! Contact endpoint request/response DTOs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ah_core::domain::entities::contact::ContactMessage;
use ah_core::services::contact::{
    ContactPage, ContactQuery, ContactStats, MonthlyCount, StatTrends, Trend,
};

/// Query string accepted by GET /contacts
///
/// Dates arrive as `YYYY-MM-DD` strings; `to` is inclusive through the end
/// of its day. `read` is the string "true" or "false"; anything else means
/// no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub read: Option<String>,
}

impl ContactListQuery {
    /// Translate the raw query string into a service query
    pub fn into_query(self) -> ContactQuery {
        ContactQuery {
            page: self.page,
            limit: self.limit,
            search: self.search,
            from: self.from.as_deref().and_then(parse_day_start),
            to: self.to.as_deref().and_then(parse_day_end),
            read: match self.read.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
        }
    }
}

fn parse_day_start(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_day_end(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    Some(date.and_time(end).and_utc())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListResponse {
    pub contacts: Vec<ContactMessage>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl From<ContactPage> for ContactListResponse {
    fn from(page: ContactPage) -> Self {
        Self {
            contacts: page.contacts,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub contact: ContactMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReadRequest {
    pub read: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkReadRequest {
    pub ids: Option<Vec<Uuid>>,
    pub read: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReadResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDto {
    pub text: String,
    pub positive: bool,
}

impl From<Trend> for TrendDto {
    fn from(trend: Trend) -> Self {
        Self {
            text: trend.text,
            positive: trend.positive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsDto {
    pub total: TrendDto,
    pub this_month: TrendDto,
    pub unread: TrendDto,
    pub avg_per_day: TrendDto,
}

impl From<StatTrends> for TrendsDto {
    fn from(trends: StatTrends) -> Self {
        Self {
            total: trends.total.into(),
            this_month: trends.this_month.into(),
            unread: trends.unread.into(),
            avg_per_day: trends.avg_per_day.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCountDto {
    pub month: String,
    pub count: u64,
}

impl From<MonthlyCount> for MonthlyCountDto {
    fn from(entry: MonthlyCount) -> Self {
        Self {
            month: entry.month,
            count: entry.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total: u64,
    pub this_month: u64,
    pub unread: u64,
    pub avg_per_day: f64,
    pub monthly_chart: Vec<MonthlyCountDto>,
    pub trends: TrendsDto,
}

impl From<ContactStats> for StatsResponse {
    fn from(stats: ContactStats) -> Self {
        Self {
            total: stats.total,
            this_month: stats.this_month,
            unread: stats.unread,
            avg_per_day: stats.avg_per_day,
            monthly_chart: stats.monthly_chart.into_iter().map(Into::into).collect(),
            trends: stats.trends.into(),
        }
    }
}
