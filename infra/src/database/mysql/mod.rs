//! MySQL implementations of the core repository traits

pub mod contact_repository_impl;
pub mod reset_token_repository_impl;
pub mod token_repository_impl;
pub mod user_repository_impl;

pub use contact_repository_impl::MySqlContactRepository;
pub use reset_token_repository_impl::MySqlResetTokenRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
