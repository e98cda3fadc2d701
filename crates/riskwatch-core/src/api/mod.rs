pub mod client;
pub mod error;
pub mod query;

pub use client::{DEFAULT_API_URL, IndicatorMessageSource, IndicatorMessagesClient};
pub use error::ApiError;
pub use query::{DEFAULT_PAGE_SIZE, FilterQuery, INDICATOR_MESSAGE_FIELDS, filter_query};
