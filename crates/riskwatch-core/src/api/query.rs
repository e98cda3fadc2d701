use std::collections::BTreeMap;

use url::Url;

use crate::api::error::ApiError;
use crate::app::domain::{FilterParams, FilterValue};

/// Attributes requested for every indicator message.
pub const INDICATOR_MESSAGE_FIELDS: &str = "name,subject,country,source,risk_score,indicator,indicator_message_type,read_more_url,created_at";

pub const DEFAULT_PAGE_SIZE: u32 = 20;

const INDICATOR_MESSAGES_PATH: &str = "v2/indicator_messages";

/// Query parameters derived from a filter set, keyed `filter[<name>]`.
///
/// A later filter with the same name overwrites an earlier one.
pub type FilterQuery = BTreeMap<String, FilterValue>;

pub fn filter_query(filters: Option<&[FilterParams]>) -> FilterQuery {
    filters
        .unwrap_or_default()
        .iter()
        .map(|filter| (filter.query_key(), filter.value.clone()))
        .collect()
}

/// All query pairs sent with a listing request, projection first.
pub fn query_pairs(page_size: u32, filters: &FilterQuery) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(filters.len() + 2);
    pairs.push((
        "fields[indicator_message]".to_string(),
        INDICATOR_MESSAGE_FIELDS.to_string(),
    ));
    pairs.push(("page[size]".to_string(), page_size.to_string()));
    pairs.extend(
        filters
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string())),
    );
    pairs
}

/// Resolve the collection endpoint against an API base URL.
///
/// Accepts bases with or without a trailing slash and bases that already
/// carry a path prefix (e.g. a gateway mount point).
pub fn indicator_messages_url(base_url: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(base_url.trim())
        .map_err(|e| ApiError::Configuration(format!("invalid API url {base_url:?}: {e}")))?;

    if base.cannot_be_a_base() {
        return Err(ApiError::Configuration(format!(
            "API url {base_url:?} cannot be used as a base"
        )));
    }

    base.set_query(None);
    base.set_fragment(None);

    let path = base.path().trim_end_matches('/').to_string();
    let segments: Vec<&str> = path.split('/').collect();
    let endpoint: Vec<&str> = INDICATOR_MESSAGES_PATH.split('/').collect();
    if segments.ends_with(&endpoint) {
        base.set_path(&path);
        return Ok(base);
    }

    base.set_path(&format!("{path}/{INDICATOR_MESSAGES_PATH}"));
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filters_add_no_parameters() {
        assert!(filter_query(None).is_empty());
        assert!(filter_query(Some(&[])).is_empty());

        let pairs = query_pairs(DEFAULT_PAGE_SIZE, &FilterQuery::new());
        assert_eq!(
            pairs,
            vec![
                (
                    "fields[indicator_message]".to_string(),
                    INDICATOR_MESSAGE_FIELDS.to_string()
                ),
                ("page[size]".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn filters_become_bracketed_keys() {
        let filters = vec![
            FilterParams::new("country", "DE"),
            FilterParams::new("unread", true),
        ];
        let query = filter_query(Some(&filters));

        assert_eq!(query.len(), 2);
        assert_eq!(
            query.get("filter[country]"),
            Some(&FilterValue::Text("DE".to_string()))
        );
        assert_eq!(query.get("filter[unread]"), Some(&FilterValue::Flag(true)));

        let pairs = query_pairs(5, &query);
        assert!(pairs.contains(&("filter[unread]".to_string(), "true".to_string())));
        assert!(pairs.contains(&("page[size]".to_string(), "5".to_string())));
    }

    #[test]
    fn duplicate_filter_names_keep_last_value() {
        let filters = vec![
            FilterParams::new("country", "DE"),
            FilterParams::new("country", "FR"),
        ];
        let query = filter_query(Some(&filters));
        assert_eq!(query.len(), 1);
        assert_eq!(
            query.get("filter[country]"),
            Some(&FilterValue::Text("FR".to_string()))
        );
    }

    #[test]
    fn endpoint_url_is_joined_onto_base() {
        for base in [
            "https://stagingapi.riskmethods.net",
            "https://stagingapi.riskmethods.net/",
            "https://stagingapi.riskmethods.net/v2/indicator_messages",
        ] {
            assert_eq!(
                indicator_messages_url(base).unwrap().as_str(),
                "https://stagingapi.riskmethods.net/v2/indicator_messages"
            );
        }

        assert_eq!(
            indicator_messages_url("http://127.0.0.1:8080/gateway/").unwrap().as_str(),
            "http://127.0.0.1:8080/gateway/v2/indicator_messages"
        );
    }

    #[test]
    fn endpoint_match_is_whole_segments_without_query() {
        assert_eq!(
            indicator_messages_url("https://api.example.com/v2/indicator_messages/?page=3#top")
                .unwrap()
                .as_str(),
            "https://api.example.com/v2/indicator_messages"
        );
        assert_eq!(
            indicator_messages_url("https://api.example.com/xv2/indicator_messages")
                .unwrap()
                .as_str(),
            "https://api.example.com/xv2/indicator_messages/v2/indicator_messages"
        );
        assert_eq!(
            indicator_messages_url("https://api.example.com/?token=x").unwrap().as_str(),
            "https://api.example.com/v2/indicator_messages"
        );
    }

    #[test]
    fn invalid_base_is_a_configuration_error() {
        assert!(matches!(
            indicator_messages_url("not a url"),
            Err(ApiError::Configuration(_))
        ));
        assert!(matches!(
            indicator_messages_url("mailto:ops@example.com"),
            Err(ApiError::Configuration(_))
        ));
    }
}
