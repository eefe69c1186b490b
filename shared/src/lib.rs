//! # AdminHub Shared
//!
//! Configuration and wire types shared by every layer of the AdminHub
//! backend. This crate is dependency-light on purpose: everything here is
//! plain data.

pub mod config;
pub mod types;

pub use config::AppConfig;
