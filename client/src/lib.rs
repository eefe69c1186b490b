//! # AdminHub Client
//!
//! Typed client for the AdminHub API. Every request attaches the in-memory
//! access token; a 401 on a non-auth endpoint triggers a single coordinated
//! session renewal, with concurrent requests queued behind the one refresh
//! call in flight.

pub mod api;
pub mod client;
pub mod coordinator;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use coordinator::{RefreshCoordinator, RefreshSlot};
pub use error::ClientError;
pub use transport::{ApiRequest, ApiResponse, ApiTransport, ReqwestTransport};
