pub mod action;
pub mod reduce;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use reduce::reduce;
pub use state::IndicatorMessagesState;
pub use types::{
    FilterParams, FilterParseError, FilterValue, IndicatorMessage, IndicatorMessageAttributes,
    IndicatorMessageId, IndicatorMessageType, RiskScore,
};
