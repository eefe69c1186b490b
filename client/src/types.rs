//! Wire types for the AdminHub API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A contact form message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// One page of contact messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    pub contacts: Vec<Contact>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

/// Filters accepted by the contact listing endpoint
#[derive(Debug, Clone, Default)]
pub struct ContactListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    /// Inclusive creation date lower bound, `YYYY-MM-DD`
    pub from: Option<String>,
    /// Inclusive creation date upper bound, `YYYY-MM-DD`
    pub to: Option<String>,
    pub read: Option<bool>,
}

impl ContactListParams {
    /// Render as a query string, empty when no filter is set
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(from) = &self.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            params.push(("to", to.clone()));
        }
        if let Some(read) = self.read {
            params.push(("read", read.to_string()));
        }

        if params.is_empty() {
            String::new()
        } else {
            let encoded: Vec<String> = params
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencode(value)))
                .collect();
            format!("?{}", encoded.join("&"))
        }
    }
}

/// Trend annotation on a stat tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTrend {
    pub text: String,
    pub positive: bool,
}

/// Trend annotations for the dashboard tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTrends {
    pub total: StatTrend,
    pub this_month: StatTrend,
    pub unread: StatTrend,
    pub avg_per_day: StatTrend,
}

/// One month of chart data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: u64,
    pub this_month: u64,
    pub unread: u64,
    pub avg_per_day: f64,
    pub monthly_chart: Vec<MonthlyCount>,
    pub trends: StatTrends,
}

/// Minimal percent-encoding for query string values
fn urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
