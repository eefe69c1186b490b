//! Refresh token persistence interface

pub mod mock;
pub mod r#trait;

pub use mock::MockRefreshTokenRepository;
pub use r#trait::RefreshTokenRepository;
