//! Paged enumeration request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ViewResult;
use crate::url::UrlBuilder;
use crate::validate::{require_range, Validate};

pub const MAX_ENUMERATION_RESULTS: u32 = 1000;

/// Sort order requested from an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnumerationOrder {
    #[serde(rename = "CreatedAscending")]
    CreatedAscending,
    #[default]
    #[serde(rename = "CreatedDescending")]
    CreatedDescending,
    #[serde(rename = "NameAscending")]
    NameAscending,
    #[serde(rename = "NameDescending")]
    NameDescending,
}

impl EnumerationOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumerationOrder::CreatedAscending => "CreatedAscending",
            EnumerationOrder::CreatedDescending => "CreatedDescending",
            EnumerationOrder::NameAscending => "NameAscending",
            EnumerationOrder::NameDescending => "NameDescending",
        }
    }
}

/// Paging parameters for `v2.0` enumeration routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnumerationQuery {
    pub max_results: u32,
    pub continuation_token: Option<String>,
    pub ordering: EnumerationOrder,
}

impl Default for EnumerationQuery {
    fn default() -> Self {
        Self {
            max_results: MAX_ENUMERATION_RESULTS,
            continuation_token: None,
            ordering: EnumerationOrder::default(),
        }
    }
}

impl EnumerationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size; must be within `1..=1000`.
    pub fn with_max_results(mut self, max_results: u32) -> ViewResult<Self> {
        require_range("MaxResults", max_results, 1, MAX_ENUMERATION_RESULTS)?;
        self.max_results = max_results;
        Ok(self)
    }

    pub fn with_continuation_token(mut self, token: impl Into<String>) -> Self {
        self.continuation_token = Some(token.into());
        self
    }

    pub fn with_ordering(mut self, ordering: EnumerationOrder) -> Self {
        self.ordering = ordering;
        self
    }

    /// Append `max-keys`, `token` and `ordering` to an enumeration URL.
    pub(crate) fn apply(&self, url: UrlBuilder) -> UrlBuilder {
        let mut url = url.query("max-keys", &self.max_results.to_string());
        if let Some(token) = self.continuation_token.as_deref().filter(|t| !t.is_empty()) {
            url = url.query("token", token);
        }
        if self.ordering != EnumerationOrder::default() {
            url = url.query("ordering", self.ordering.as_str());
        }
        url
    }
}

impl Validate for EnumerationQuery {
    fn validate(&self) -> ViewResult<()> {
        require_range("MaxResults", self.max_results, 1, MAX_ENUMERATION_RESULTS)
    }
}

/// Server-side timing attached to an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Timestamp {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub total_ms: Option<f64>,
}

/// One page of an enumeration.
///
/// `objects` is never null: an absent or `null` field deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct EnumerationResult<T> {
    pub success: bool,
    pub timestamp: Option<Timestamp>,
    pub max_results: u32,
    pub continuation_token: Option<String>,
    pub end_of_results: bool,
    pub total_records: u64,
    pub records_remaining: u64,
    #[serde(deserialize_with = "null_as_empty")]
    pub objects: Vec<T>,
}

impl<T> Default for EnumerationResult<T> {
    fn default() -> Self {
        Self {
            success: true,
            timestamp: None,
            max_results: MAX_ENUMERATION_RESULTS,
            continuation_token: None,
            end_of_results: true,
            total_records: 0,
            records_remaining: 0,
            objects: Vec::new(),
        }
    }
}

impl<T> EnumerationResult<T> {
    /// A final page holding `objects`.
    pub fn new(objects: Vec<T>) -> Self {
        let total = objects.len() as u64;
        Self {
            total_records: total,
            objects,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Token for the next page, if the server reported more results.
    pub fn next_token(&self) -> Option<&str> {
        if self.end_of_results {
            return None;
        }
        self.continuation_token.as_deref().filter(|t| !t.is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_default_empty() {
        let result: EnumerationResult<String> = EnumerationResult::default();
        assert!(result.objects.is_empty());
        assert!(result.next_token().is_none());

        let result: EnumerationResult<String> = serde_json::from_str(r#"{"Success":true}"#).unwrap();
        assert!(result.objects.is_empty());

        let result: EnumerationResult<String> = serde_json::from_str(r#"{"Objects":null}"#).unwrap();
        assert!(result.objects.is_empty());
    }

    #[test]
    fn test_result_wire_fields() {
        let json = r#"{
            "Success": true,
            "MaxResults": 2,
            "ContinuationToken": "6bc3b0d1-8b9a-4b3e-9f39-4c2f2f3b9c1a",
            "EndOfResults": false,
            "TotalRecords": 5,
            "RecordsRemaining": 3,
            "Objects": ["a", "b"]
        }"#;
        let result: EnumerationResult<String> = serde_json::from_str(json).unwrap();
        assert_eq!(result.max_results, 2);
        assert_eq!(result.records_remaining, 3);
        assert_eq!(result.len(), 2);
        assert_eq!(result.next_token(), Some("6bc3b0d1-8b9a-4b3e-9f39-4c2f2f3b9c1a"));
    }

    #[test]
    fn test_query_bounds() {
        assert!(EnumerationQuery::new().with_max_results(0).is_err());
        assert!(EnumerationQuery::new().with_max_results(1001).is_err());
        assert_eq!(EnumerationQuery::new().with_max_results(25).unwrap().max_results, 25);

        let mut query = EnumerationQuery::new();
        query.max_results = 5000;
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_query_parameters() {
        let url = EnumerationQuery::new()
            .with_max_results(10)
            .unwrap()
            .with_continuation_token("tok")
            .with_ordering(EnumerationOrder::NameAscending)
            .apply(UrlBuilder::new("http://h"))
            .build();
        assert_eq!(url, "http://h?max-keys=10&token=tok&ordering=NameAscending");

        let url = EnumerationQuery::new().apply(UrlBuilder::new("http://h")).build();
        assert_eq!(url, "http://h?max-keys=1000");
    }

    #[test]
    fn test_ordering_wire_strings() {
        assert_eq!(serde_json::to_string(&EnumerationOrder::CreatedDescending).unwrap(), "\"CreatedDescending\"");
        assert!(serde_json::from_str::<EnumerationOrder>("\"Random\"").is_err());
    }
}
