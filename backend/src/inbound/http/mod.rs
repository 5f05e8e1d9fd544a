//! HTTP inbound adapter exposing the user REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod state;
pub mod users;
pub mod users_dto;

pub use error::ApiResult;
