//! Contact message service: listing, flags, and dashboard statistics

pub mod service;

#[cfg(test)]
mod tests;

pub use service::{
    ContactPage, ContactQuery, ContactService, ContactStats, MonthlyCount, StatTrends, Trend,
};
