use tracing::{debug, warn};

use crate::api::{ApiError, IndicatorMessageSource, filter_query};
use crate::app::domain::{Action, FilterParams};
use crate::app::store::Dispatch;

/// Text stored in `state.error` for a failed fetch.
pub fn failure_message(err: &ApiError) -> String {
    format!("Error: {err}")
}

/// Load indicator messages and record the outcome through `dispatch`.
///
/// When `filters` is given it becomes the current filter set before the
/// request starts. Every failure is turned into
/// [`Action::GetIndicatorMessagesFailure`]; callers read the outcome from the
/// state, this function never errors. Overlapping calls are not coordinated.
pub async fn fetch_indicator_messages<S>(
    dispatch: &dyn Dispatch,
    source: &S,
    token: &str,
    filters: Option<Vec<FilterParams>>,
) where
    S: IndicatorMessageSource + ?Sized,
{
    let query = filter_query(filters.as_deref());

    if let Some(filters) = filters {
        dispatch.dispatch(Action::SetFilters { filters });
    }

    dispatch.dispatch(Action::GetIndicatorMessagesStart);

    match source.list_indicator_messages(token, &query).await {
        Ok(messages) => {
            debug!(target: "riskwatch::fetch", count = messages.len(), "fetch succeeded");
            dispatch.dispatch(Action::GetIndicatorMessagesSuccess { messages });
        }
        Err(err) => {
            warn!(target: "riskwatch::fetch", error = %err, "fetch failed");
            dispatch.dispatch(Action::GetIndicatorMessagesFailure {
                error: failure_message(&err),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::FilterValue;
    use crate::app::store::Store;
    use crate::test_utils::{FailingSource, RecordingDispatcher, StaticSource, sample_message};

    #[tokio::test]
    async fn success_stores_messages() {
        let store = Store::new();
        let source = StaticSource::new(vec![sample_message(1), sample_message(2)]);

        fetch_indicator_messages(&store, &source, "tok", None).await;

        let state = store.state();
        assert_eq!(state.messages, Some(vec![sample_message(1), sample_message(2)]));
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.filters.is_none());
    }

    #[tokio::test]
    async fn failure_records_error_and_keeps_messages() {
        let store = Store::new();
        store.dispatch(Action::GetIndicatorMessagesSuccess {
            messages: vec![sample_message(9)],
        });
        let source = FailingSource::new("Network Error");

        fetch_indicator_messages(&store, &source, "tok", None).await;

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("Error: Network Error"));
        assert!(!state.is_loading);
        assert_eq!(state.messages, Some(vec![sample_message(9)]));
    }

    #[tokio::test]
    async fn filters_are_set_before_loading_starts() {
        let recorder = RecordingDispatcher::new();
        let source = StaticSource::new(vec![]);
        let filters = vec![FilterParams::new("country", "DE")];

        fetch_indicator_messages(&recorder, &source, "tok", Some(filters.clone())).await;

        let actions = recorder.actions();
        assert_eq!(
            actions,
            vec![
                Action::SetFilters { filters },
                Action::GetIndicatorMessagesStart,
                Action::GetIndicatorMessagesSuccess { messages: vec![] },
            ]
        );
    }

    #[tokio::test]
    async fn without_filters_no_filter_action_is_dispatched() {
        let recorder = RecordingDispatcher::new();
        let source = FailingSource::new("boom");

        fetch_indicator_messages(&recorder, &source, "tok", None).await;

        let kinds: Vec<_> = recorder.actions().iter().map(Action::kind).collect();
        assert_eq!(
            kinds,
            vec!["getIndicatorMessagesStart", "getIndicatorMessagesFailure"]
        );
    }

    #[tokio::test]
    async fn source_receives_token_and_filter_query() {
        let store = Store::new();
        let source = StaticSource::new(vec![]);
        let filters = vec![
            FilterParams::new("country", "DE"),
            FilterParams::new("unread", true),
        ];

        fetch_indicator_messages(&store, &source, "secret", Some(filters)).await;

        let calls = source.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "secret");
        assert_eq!(
            calls[0].1.get("filter[country]"),
            Some(&FilterValue::Text("DE".to_string()))
        );
        assert_eq!(
            calls[0].1.get("filter[unread]"),
            Some(&FilterValue::Flag(true))
        );
    }

    #[tokio::test]
    async fn status_failures_are_rendered() {
        let store = Store::new();
        let source = FailingSource::with_error(|| ApiError::Status {
            status: 401,
            body: String::new(),
        });

        fetch_indicator_messages(&store, &source, "tok", None).await;

        assert_eq!(
            store.state().error.as_deref(),
            Some("Error: Request failed with status code 401")
        );
    }
}
