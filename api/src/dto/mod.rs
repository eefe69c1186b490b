//! Request and response DTOs

pub mod auth_dto;
pub mod contact_dto;

pub use auth_dto::*;
pub use contact_dto::*;
