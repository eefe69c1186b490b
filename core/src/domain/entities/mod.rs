//! Domain entities

pub mod contact;
pub mod token;
pub mod user;

pub use contact::ContactMessage;
pub use token::{Claims, PasswordResetToken, RefreshToken};
pub use user::{User, UserSummary};
