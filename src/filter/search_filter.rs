//! Validated filter value objects

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::condition::SearchCondition;
use super::eval::evaluate;
use super::value::{parse_datetime, parse_decimal, FieldValue};
use crate::error::{ViewError, ViewResult};

/// Wire shape shared by both filter kinds, before validation.
#[derive(Deserialize)]
struct RawFilter {
    #[serde(rename = "Field")]
    field: String,
    #[serde(rename = "Condition")]
    condition: SearchCondition,
    #[serde(rename = "Value", default)]
    value: Option<String>,
}

fn check(field: &str, condition: SearchCondition, value: Option<&str>) -> ViewResult<()> {
    if field.trim().is_empty() {
        return Err(ViewError::invalid("filter field must not be empty"));
    }
    if condition.is_ordering() {
        if let Some(v) = value {
            if parse_decimal(v).is_none() && parse_datetime(v).is_none() {
                return Err(ViewError::invalid(format!(
                    "{} requires a numeric or date value (got {:?})",
                    condition, v
                )));
            }
        }
    }
    Ok(())
}

/// A single search criterion over a document field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    #[serde(rename = "Field")]
    field: String,
    #[serde(rename = "Condition")]
    condition: SearchCondition,
    #[serde(rename = "Value")]
    value: Option<String>,
}

impl SearchFilter {
    /// Create a filter.
    ///
    /// Fails when `field` is empty, or when an ordering condition is given a
    /// value that is neither a decimal number nor a date.
    pub fn new(field: &str, condition: SearchCondition, value: Option<&str>) -> ViewResult<Self> {
        check(field, condition, value)?;
        Ok(Self {
            field: field.to_string(),
            condition,
            value: value.map(str::to_string),
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn condition(&self) -> SearchCondition {
        self.condition
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn evaluate(&self, candidate: Option<&FieldValue>) -> bool {
        evaluate(self.condition, self.value(), candidate)
    }

    /// Resolve the field in `record` (absent means null) and evaluate.
    pub fn matches(&self, record: &HashMap<String, FieldValue>) -> bool {
        self.evaluate(record.get(&self.field))
    }
}

impl<'de> Deserialize<'de> for SearchFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFilter::deserialize(deserializer)?;
        SearchFilter::new(&raw.field, raw.condition, raw.value.as_deref()).map_err(serde::de::Error::custom)
    }
}

/// A criterion over a schema key of a document, used by schema-constrained search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaFilter {
    #[serde(rename = "Field")]
    field: String,
    #[serde(rename = "Condition")]
    condition: SearchCondition,
    #[serde(rename = "Value")]
    value: Option<String>,
}

impl SchemaFilter {
    pub fn new(field: &str, condition: SearchCondition, value: Option<&str>) -> ViewResult<Self> {
        check(field, condition, value)?;
        Ok(Self {
            field: field.to_string(),
            condition,
            value: value.map(str::to_string),
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn condition(&self) -> SearchCondition {
        self.condition
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn evaluate(&self, candidate: Option<&FieldValue>) -> bool {
        evaluate(self.condition, self.value(), candidate)
    }

    pub fn matches(&self, record: &HashMap<String, FieldValue>) -> bool {
        self.evaluate(record.get(&self.field))
    }
}

impl<'de> Deserialize<'de> for SchemaFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFilter::deserialize(deserializer)?;
        SchemaFilter::new(&raw.field, raw.condition, raw.value.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl From<SearchFilter> for SchemaFilter {
    fn from(filter: SearchFilter) -> Self {
        Self {
            field: filter.field,
            condition: filter.condition,
            value: filter.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_construction_guards() {
        assert!(SearchFilter::new("", SearchCondition::Equals, Some("a")).is_err());
        assert!(SearchFilter::new("  ", SearchCondition::Equals, Some("a")).is_err());
        assert!(SearchFilter::new("age", SearchCondition::GreaterThan, Some("abc")).is_err());
        assert!(SchemaFilter::new("age", SearchCondition::LessThan, Some("abc")).is_err());

        assert!(SearchFilter::new("age", SearchCondition::GreaterThan, Some("10")).is_ok());
        assert!(SearchFilter::new("age", SearchCondition::GreaterThan, Some("10.5")).is_ok());
        assert!(SearchFilter::new("created", SearchCondition::GreaterThanOrEqualTo, Some("2024-01-01")).is_ok());
        assert!(SearchFilter::new("age", SearchCondition::GreaterThan, None).is_ok());
        assert!(SearchFilter::new("name", SearchCondition::Equals, Some("abc")).is_ok());
    }

    #[test]
    fn test_matches_resolves_field() {
        let mut record = HashMap::new();
        record.insert("name".to_string(), FieldValue::from("report.pdf"));
        record.insert("size".to_string(), FieldValue::from(2048i64));
        record.insert(
            "created".to_string(),
            FieldValue::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        );

        let by_suffix = SearchFilter::new("name", SearchCondition::EndsWith, Some(".pdf")).unwrap();
        let by_size = SearchFilter::new("size", SearchCondition::GreaterThan, Some("1024")).unwrap();
        let by_date = SearchFilter::new("created", SearchCondition::GreaterThanOrEqualTo, Some("2024-01-01")).unwrap();
        let missing = SearchFilter::new("owner", SearchCondition::IsNull, Some("ignored")).unwrap();
        let present = SchemaFilter::new("owner", SearchCondition::IsNotNull, None).unwrap();

        assert!(by_suffix.matches(&record));
        assert!(by_size.matches(&record));
        assert!(by_date.matches(&record));
        assert!(missing.matches(&record));
        assert!(!present.matches(&record));
    }

    #[test]
    fn test_serde_wire_shape() {
        let filter = SearchFilter::new("Key", SearchCondition::StartsWith, Some("docs/")).unwrap();
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Field": "Key", "Condition": "StartsWith", "Value": "docs/"})
        );
        let back: SearchFilter = serde_json::from_value(json).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn test_deserialize_runs_guards() {
        let bad = serde_json::from_str::<SearchFilter>(r#"{"Field":"Size","Condition":"GreaterThan","Value":"big"}"#);
        assert!(bad.is_err());

        let empty = serde_json::from_str::<SchemaFilter>(r#"{"Field":"","Condition":"Equals","Value":"x"}"#);
        assert!(empty.is_err());

        let no_value: SchemaFilter = serde_json::from_str(r#"{"Field":"Size","Condition":"IsNull"}"#).unwrap();
        assert_eq!(no_value.value(), None);
    }
}
