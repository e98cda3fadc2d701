use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::app::domain::{Action, IndicatorMessagesState, reduce};

const ACTION_CHANNEL_SIZE: usize = 64;

/// Capability to apply an [`Action`] to some state.
///
/// The fetch routine only ever sees this trait, never the state itself.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

impl<T: Dispatch + ?Sized> Dispatch for std::sync::Arc<T> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

impl<T: Dispatch + ?Sized> Dispatch for &T {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

/// Owns the indicator message state.
///
/// Reads go through [`Store::state`] or a [`watch::Receiver`] from
/// [`Store::subscribe`]. The only write path is [`Dispatch::dispatch`], which
/// runs the reducer while holding the channel's write lock, so two dispatches
/// never interleave.
pub struct Store {
    state: watch::Sender<IndicatorMessagesState>,
    actions: broadcast::Sender<Action>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(IndicatorMessagesState::new())
    }

    pub fn with_state(initial: IndicatorMessagesState) -> Self {
        let (actions, _) = broadcast::channel(ACTION_CHANNEL_SIZE);
        Self {
            state: watch::Sender::new(initial),
            actions,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> IndicatorMessagesState {
        self.state.borrow().clone()
    }

    /// Observe every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<IndicatorMessagesState> {
        self.state.subscribe()
    }

    /// Observe every applied action, in application order.
    pub fn subscribe_actions(&self) -> broadcast::Receiver<Action> {
        self.actions.subscribe()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        debug!(target: "riskwatch::store", action = %action.name(), "dispatching");

        let observed = self.actions.receiver_count() > 0;
        let record = observed.then(|| action.clone());

        self.state.send_modify(|state| reduce(state, action));

        if let Some(action) = record {
            // Lagging observers only miss log entries, the state is already applied.
            let _ = self.actions.send(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{FilterParams, IndicatorMessageId};
    use crate::test_utils::sample_message;
    use std::sync::Arc;

    #[test]
    fn starts_empty() {
        let store = Store::new();
        let state = store.state();
        assert!(state.messages.is_none());
        assert!(state.filters.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn set_filters_is_visible_in_snapshot() {
        let store = Store::new();
        store.dispatch(Action::SetFilters {
            filters: vec![FilterParams::new("country", "DE")],
        });

        let state = store.state();
        assert_eq!(state.filters, Some(vec![FilterParams::new("country", "DE")]));
        assert!(state.messages.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(Action::GetIndicatorMessagesStart);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading);

        store.dispatch(Action::GetIndicatorMessagesSuccess {
            messages: vec![sample_message(1)],
        });
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert!(!state.is_loading);
        assert_eq!(state.message_count(), 1);
    }

    #[tokio::test]
    async fn action_log_preserves_order() {
        let store = Store::new();
        let mut actions = store.subscribe_actions();

        store.dispatch(Action::SetFilters { filters: vec![] });
        store.dispatch(Action::GetIndicatorMessagesStart);

        assert_eq!(actions.recv().await.unwrap().kind(), "setFilters");
        assert_eq!(
            actions.recv().await.unwrap().kind(),
            "getIndicatorMessagesStart"
        );
    }

    #[tokio::test]
    async fn concurrent_dispatches_apply_whole_actions() {
        let store = Arc::new(Store::new());
        let mut handles = Vec::new();

        for i in 0..16i64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.dispatch(Action::GetIndicatorMessagesStart);
                store.dispatch(Action::GetIndicatorMessagesSuccess {
                    messages: vec![sample_message(i), sample_message(i + 100)],
                });
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let state = store.state();
        assert_eq!(state.message_count(), 2);
        let messages = state.messages.unwrap();
        let first: i64 = messages[0].id.to_string().parse().unwrap();
        assert_eq!(messages[1].id, IndicatorMessageId::from(first + 100));
    }
}
