//! Collection search requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::collection::SourceDocument;
use super::enumeration::{EnumerationOrder, EnumerationResult, MAX_ENUMERATION_RESULTS};
use crate::error::{ViewError, ViewResult};
use crate::filter::{FieldValue, SchemaFilter, SearchFilter};
use crate::validate::{require_non_empty, require_range, Validate};

/// A page of documents matching a [`SearchQuery`].
pub type SearchResult = EnumerationResult<SourceDocument>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchQuery {
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "CollectionGUID")]
    pub collection_guid: Uuid,
    pub max_results: u32,
    pub continuation_token: Option<String>,
    pub ordering: EnumerationOrder,
    pub include_data: bool,
    pub include_top_terms: bool,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub terms: Vec<String>,
    pub exclude: Vec<String>,
    pub filters: Vec<SearchFilter>,
    pub schema_filters: Vec<SchemaFilter>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            tenant_guid: Uuid::nil(),
            collection_guid: Uuid::nil(),
            max_results: MAX_ENUMERATION_RESULTS,
            continuation_token: None,
            ordering: EnumerationOrder::default(),
            include_data: false,
            include_top_terms: false,
            created_after: None,
            created_before: None,
            terms: Vec::new(),
            exclude: Vec::new(),
            filters: Vec::new(),
            schema_filters: Vec::new(),
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn with_term(mut self, term: &str) -> ViewResult<Self> {
        require_non_empty("Term", term)?;
        self.terms.push(term.to_string());
        Ok(self)
    }

    pub fn with_exclusion(mut self, term: &str) -> ViewResult<Self> {
        require_non_empty("Exclude", term)?;
        self.exclude.push(term.to_string());
        Ok(self)
    }

    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_schema_filter(mut self, filter: SchemaFilter) -> Self {
        self.schema_filters.push(filter);
        self
    }

    pub fn created_between(mut self, after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> ViewResult<Self> {
        self.created_after = after;
        self.created_before = before;
        self.check_created_range()?;
        Ok(self)
    }

    fn check_created_range(&self) -> ViewResult<()> {
        if let (Some(after), Some(before)) = (self.created_after, self.created_before) {
            if after > before {
                return Err(ViewError::invalid("CreatedAfter must not be later than CreatedBefore"));
            }
        }
        Ok(())
    }

    /// Apply the creation window and field filters to a document locally.
    pub fn matches(&self, document: &SourceDocument) -> bool {
        if self.created_after.map_or(false, |after| document.created_utc < after) {
            return false;
        }
        if self.created_before.map_or(false, |before| document.created_utc > before) {
            return false;
        }
        let fields = document.field_values();
        self.filters.iter().all(|f| f.matches(&fields))
    }

    /// Apply the schema filters to a document's flattened schema.
    pub fn matches_schema(&self, schema: &HashMap<String, FieldValue>) -> bool {
        self.schema_filters.iter().all(|f| f.matches(schema))
    }
}

impl Validate for SearchQuery {
    fn validate(&self) -> ViewResult<()> {
        require_range("MaxResults", self.max_results, 1, MAX_ENUMERATION_RESULTS)?;
        self.check_created_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SearchCondition;
    use chrono::TimeZone;

    fn document(key: &str, length: i64, created: DateTime<Utc>) -> SourceDocument {
        SourceDocument {
            object_key: key.to_string(),
            content_type: "text/plain".to_string(),
            content_length: length,
            created_utc: created,
            ..SourceDocument::default()
        }
    }

    #[test]
    fn test_local_match() {
        let jan = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let query = SearchQuery::new()
            .with_filter(SearchFilter::new("ObjectKey", SearchCondition::StartsWith, Some("logs/")).unwrap())
            .with_filter(SearchFilter::new("ContentLength", SearchCondition::LessThanOrEqualTo, Some("1000")).unwrap())
            .created_between(Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()), None)
            .unwrap();

        assert!(query.matches(&document("logs/a.txt", 500, jan)));
        assert!(!query.matches(&document("data/a.txt", 500, jan)));
        assert!(!query.matches(&document("logs/a.txt", 5000, jan)));
        assert!(!query.matches(&document("logs/a.txt", 500, Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap())));
    }

    #[test]
    fn test_schema_match() {
        let query = SearchQuery::new()
            .with_schema_filter(SchemaFilter::new("author", SearchCondition::Equals, Some("ada")).unwrap());
        let mut schema = HashMap::new();
        assert!(!query.matches_schema(&schema));
        schema.insert("author".to_string(), FieldValue::from("ada"));
        assert!(query.matches_schema(&schema));
    }

    #[test]
    fn test_query_guards() {
        assert!(SearchQuery::new().with_max_results(0).is_err());
        assert!(SearchQuery::new().with_term(" ").is_err());

        let after = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(SearchQuery::new().created_between(Some(after), Some(before)).is_err());
    }

    #[test]
    fn test_query_wire_shape() {
        let query = SearchQuery::new()
            .with_term("invoice")
            .unwrap()
            .with_filter(SearchFilter::new("ContentType", SearchCondition::Equals, Some("application/pdf")).unwrap());
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["MaxResults"], 1000);
        assert_eq!(json["Ordering"], "CreatedDescending");
        assert_eq!(json["Terms"][0], "invoice");
        assert_eq!(json["Filters"][0]["Condition"], "Equals");

        let back: SearchQuery = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }
}
