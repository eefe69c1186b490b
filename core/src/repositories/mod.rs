//! Repository interfaces for persisted entities.
//!
//! Each repository is a narrow trait over the row store so the services stay
//! testable with in-memory fakes and the storage technology stays swappable.

pub mod contact;
pub mod reset;
pub mod token;
pub mod user;

pub use contact::{ContactFilter, ContactRepository};
pub use reset::ResetTokenRepository;
pub use token::RefreshTokenRepository;
pub use user::UserRepository;
