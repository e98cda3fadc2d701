pub mod domain;
pub mod fetch;
pub mod store;

pub use domain::{Action, FilterParams, FilterValue, IndicatorMessage, IndicatorMessagesState};
pub use fetch::fetch_indicator_messages;
pub use store::{Dispatch, Store};
