//! HTTP inbound adapter exposing the blog views as JSON render contexts.

pub mod dto;
pub mod error;
pub mod health;
pub mod posts;
pub mod read_later;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
