//! Indicator message state, its REST client, and access-token storage.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod utils;

pub use error::{Error, Result};
