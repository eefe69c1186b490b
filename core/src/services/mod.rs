//! Business services

pub mod auth;
pub mod contact;
pub mod mailer;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig};
pub use contact::ContactService;
pub use mailer::{Mailer, MailerError};
pub use token::{TokenService, TokenServiceConfig};
