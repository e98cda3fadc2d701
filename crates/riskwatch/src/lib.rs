pub mod cli;
pub mod commands;
pub mod error;

pub use riskwatch_core::{api, app, auth, config};
