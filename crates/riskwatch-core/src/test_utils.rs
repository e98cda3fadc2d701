//! Fixtures shared by unit and integration tests.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::api::{ApiError, FilterQuery, IndicatorMessageSource};
use crate::app::domain::{
    Action, IndicatorMessage, IndicatorMessageAttributes, IndicatorMessageId,
    IndicatorMessageType, RiskScore,
};
use crate::app::store::Dispatch;

pub fn sample_message(id: i64) -> IndicatorMessage {
    IndicatorMessage {
        id: IndicatorMessageId::from(id),
        attributes: IndicatorMessageAttributes {
            name: format!("Indicator {id}"),
            subject: "Hamburg port".to_string(),
            source: "newswire".to_string(),
            risk_score: RiskScore {
                available: true,
                value: Some(5.0),
            },
            indicator_message_type: IndicatorMessageType::Location,
            created_at: "2020-03-01T10:00:00.000Z".to_string(),
            ..Default::default()
        },
        extra: serde_json::Map::new(),
    }
}

/// Source that always answers with the same messages and records each call.
pub struct StaticSource {
    messages: Vec<IndicatorMessage>,
    calls: Mutex<Vec<(String, FilterQuery)>>,
}

impl StaticSource {
    pub fn new(messages: Vec<IndicatorMessage>) -> Self {
        Self {
            messages,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, FilterQuery)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl IndicatorMessageSource for StaticSource {
    async fn list_indicator_messages(
        &self,
        token: &str,
        filters: &FilterQuery,
    ) -> Result<Vec<IndicatorMessage>, ApiError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((token.to_string(), filters.clone()));
        Ok(self.messages.clone())
    }
}

/// Source that fails every call.
pub struct FailingSource {
    make_error: Box<dyn Fn() -> ApiError + Send + Sync>,
}

impl FailingSource {
    /// Fails with a transport error carrying `message` verbatim.
    pub fn new(message: &str) -> Self {
        let message = message.to_string();
        Self::with_error(move || ApiError::Transport(message.clone()))
    }

    pub fn with_error<F>(make_error: F) -> Self
    where
        F: Fn() -> ApiError + Send + Sync + 'static,
    {
        Self {
            make_error: Box::new(make_error),
        }
    }
}

#[async_trait]
impl IndicatorMessageSource for FailingSource {
    async fn list_indicator_messages(
        &self,
        _token: &str,
        _filters: &FilterQuery,
    ) -> Result<Vec<IndicatorMessage>, ApiError> {
        Err((self.make_error)())
    }
}

/// Dispatcher that only records what it was asked to apply.
#[derive(Default)]
pub struct RecordingDispatcher {
    actions: Mutex<Vec<Action>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, action: Action) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }
}
