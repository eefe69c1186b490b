//! Password reset token persistence interface

pub mod mock;
pub mod r#trait;

pub use mock::MockResetTokenRepository;
pub use r#trait::ResetTokenRepository;
