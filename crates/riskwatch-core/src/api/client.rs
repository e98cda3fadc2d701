use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::api::error::ApiError;
use crate::api::query::{DEFAULT_PAGE_SIZE, FilterQuery, indicator_messages_url, query_pairs};
use crate::app::domain::IndicatorMessage;

pub const DEFAULT_API_URL: &str = "https://stagingapi.riskmethods.net";

/// Anything that can list indicator messages for a bearer token.
#[async_trait]
pub trait IndicatorMessageSource: Send + Sync {
    async fn list_indicator_messages(
        &self,
        token: &str,
        filters: &FilterQuery,
    ) -> Result<Vec<IndicatorMessage>, ApiError>;
}

#[derive(Debug, Deserialize)]
struct IndicatorMessagesResponse {
    data: Vec<IndicatorMessage>,
}

#[derive(Clone)]
pub struct IndicatorMessagesClient {
    http_client: reqwest::Client,
    endpoint: Url,
    page_size: u32,
}

impl IndicatorMessagesClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.api+json, application/json"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("riskwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            endpoint: indicator_messages_url(base_url)?,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl IndicatorMessageSource for IndicatorMessagesClient {
    async fn list_indicator_messages(
        &self,
        token: &str,
        filters: &FilterQuery,
    ) -> Result<Vec<IndicatorMessage>, ApiError> {
        let pairs = query_pairs(self.page_size, filters);
        debug!(
            target: "riskwatch::api",
            endpoint = %self.endpoint,
            filters = filters.len(),
            page_size = self.page_size,
            "listing indicator messages"
        );

        let response = self
            .http_client
            .get(self.endpoint.clone())
            .bearer_auth(token)
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                target: "riskwatch::api",
                status = status.as_u16(),
                "indicator message request rejected"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: IndicatorMessagesResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::ResponseParsing {
                details: e.to_string(),
            })?;

        debug!(
            target: "riskwatch::api",
            count = parsed.data.len(),
            "received indicator messages"
        );
        Ok(parsed.data)
    }
}
