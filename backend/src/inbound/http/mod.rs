//! HTTP inbound adapter exposing the todo REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod todos;

pub use error::ApiResult;
