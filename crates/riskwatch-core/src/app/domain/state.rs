use crate::app::domain::types::{FilterParams, IndicatorMessage};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorMessagesState {
    /// `None` until the first successful fetch.
    pub messages: Option<Vec<IndicatorMessage>>,
    pub filters: Option<Vec<FilterParams>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl IndicatorMessagesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_count(&self) -> usize {
        self.messages.as_ref().map_or(0, Vec::len)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub(crate) fn start_loading(&mut self) {
        self.is_loading = true;
    }

    pub(crate) fn loading_failed(&mut self, error: String) {
        self.error = Some(error);
        self.is_loading = false;
    }

    pub(crate) fn loading_succeeded(&mut self, messages: Vec<IndicatorMessage>) {
        self.messages = Some(messages);
        self.is_loading = false;
        self.error = None;
    }
}
