//! Authentication route handlers
//!
//! One module per endpoint:
//! - Signup / login open sessions and set the refresh cookie
//! - Refresh rotates the cookie and mints a new access token
//! - Logout revokes the presented session
//! - Forgot / verify / reset drive the password reset token lifecycle
//! - Profile updates the authenticated user's name

pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod reset_password;
pub mod signup;
pub mod verify_reset_token;
