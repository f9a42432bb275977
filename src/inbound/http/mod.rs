//! HTTP inbound adapter exposing the people endpoints.

pub mod error;
pub mod health;
pub mod people;
pub mod state;

pub use error::ApiResult;
