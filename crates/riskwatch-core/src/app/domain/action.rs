use crate::app::domain::types::{FilterParams, IndicatorMessage};

const SLICE_NAME: &str = "indicatorMessages";

/// The only ways the indicator message state may change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GetIndicatorMessagesStart,

    GetIndicatorMessagesSuccess { messages: Vec<IndicatorMessage> },

    GetIndicatorMessagesFailure { error: String },

    SetFilters { filters: Vec<FilterParams> },
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::GetIndicatorMessagesStart => "getIndicatorMessagesStart",
            Action::GetIndicatorMessagesSuccess { .. } => "getIndicatorMessagesSuccess",
            Action::GetIndicatorMessagesFailure { .. } => "getIndicatorMessagesFailure",
            Action::SetFilters { .. } => "setFilters",
        }
    }

    /// Fully qualified action name, e.g. `indicatorMessages/setFilters`.
    pub fn name(&self) -> String {
        format!("{SLICE_NAME}/{}", self.kind())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Action::GetIndicatorMessagesSuccess { .. } | Action::GetIndicatorMessagesFailure { .. }
        )
    }
}
