//! Contact message persistence interface

pub mod mock;
pub mod r#trait;

pub use mock::MockContactRepository;
pub use r#trait::{ContactFilter, ContactRepository};
