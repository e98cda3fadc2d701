use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of an indicator message, kept exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorMessageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for IndicatorMessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorMessageId::Number(n) => write!(f, "{n}"),
            IndicatorMessageId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IndicatorMessageId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for IndicatorMessageId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Kind of subject a message is about. Unrecognised tags land in `Other`
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IndicatorMessageType {
    Location,
    Country,
    BusinessPartner,
    Other(String),
}

impl IndicatorMessageType {
    pub fn as_str(&self) -> &str {
        match self {
            IndicatorMessageType::Location => "location",
            IndicatorMessageType::Country => "country",
            IndicatorMessageType::BusinessPartner => "businesspartner",
            IndicatorMessageType::Other(tag) => tag,
        }
    }
}

impl Default for IndicatorMessageType {
    fn default() -> Self {
        IndicatorMessageType::Other(String::new())
    }
}

impl From<String> for IndicatorMessageType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "location" => IndicatorMessageType::Location,
            "country" => IndicatorMessageType::Country,
            "businesspartner" => IndicatorMessageType::BusinessPartner,
            _ => IndicatorMessageType::Other(tag),
        }
    }
}

impl From<IndicatorMessageType> for String {
    fn from(kind: IndicatorMessageType) -> Self {
        match kind {
            IndicatorMessageType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for IndicatorMessageType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for IndicatorMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskScore {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub value: Option<f64>,
}

impl RiskScore {
    /// The score, when the server marked it as available.
    pub fn value(&self) -> Option<f64> {
        self.value.filter(|_| self.available)
    }
}

/// Message attributes. Every field is optional on the wire and fields this
/// client does not model are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorMessageAttributes {
    pub name: String,
    pub subject: String,
    pub source: String,
    pub risk_score: RiskScore,
    pub indicator_message_type: IndicatorMessageType,
    /// Origin-formatted timestamp, kept verbatim.
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_more_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An indicator message as delivered by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMessage {
    pub id: IndicatorMessageId,
    #[serde(default)]
    pub attributes: IndicatorMessageAttributes,
    /// Resource members besides `id` and `attributes`, e.g. `type` or `links`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IndicatorMessage {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn subject(&self) -> &str {
        &self.attributes.subject
    }

    pub fn source(&self) -> &str {
        &self.attributes.source
    }

    pub fn message_type(&self) -> &IndicatorMessageType {
        &self.attributes.indicator_message_type
    }

    pub fn risk_score(&self) -> Option<f64> {
        self.attributes.risk_score.value()
    }

    pub fn created_at(&self) -> &str {
        &self.attributes.created_at
    }
}

/// Value side of a filter. The API only accepts text or booleans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Flag(b) => write!(f, "{b}"),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterParams {
    pub name: String,
    pub value: FilterValue,
}

impl FilterParams {
    pub fn new(name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Query key the API expects for this filter, e.g. `filter[country]`.
    pub fn query_key(&self) -> String {
        format!("filter[{}]", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParseError {
    #[error("filter must look like name=value, got {0:?}")]
    MissingSeparator(String),
    #[error("filter name cannot be empty in {0:?}")]
    EmptyName(String),
}

impl FromStr for FilterParams {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| FilterParseError::MissingSeparator(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(FilterParseError::EmptyName(s.to_string()));
        }

        let value = match value.trim() {
            "true" => FilterValue::Flag(true),
            "false" => FilterValue::Flag(false),
            other => FilterValue::Text(other.to_string()),
        };

        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}
