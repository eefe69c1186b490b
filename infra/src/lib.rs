//! # AdminHub Infrastructure
//!
//! Concrete implementations of the core repository and mailer traits:
//! MySQL persistence through SQLx and a development mailer that logs reset
//! links instead of delivering them.

pub mod database;
pub mod email;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlContactRepository, MySqlRefreshTokenRepository, MySqlResetTokenRepository,
    MySqlUserRepository,
};
pub use email::LogMailer;
