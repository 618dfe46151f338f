//! Comparison operators used by search and schema filters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied between a candidate value and a filter value.
///
/// Wire strings are the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchCondition {
    #[serde(rename = "Equals")]
    Equals,
    #[serde(rename = "NotEquals")]
    NotEquals,
    #[serde(rename = "Contains")]
    Contains,
    #[serde(rename = "ContainsNot")]
    ContainsNot,
    #[serde(rename = "StartsWith")]
    StartsWith,
    #[serde(rename = "EndsWith")]
    EndsWith,
    #[serde(rename = "GreaterThan")]
    GreaterThan,
    #[serde(rename = "GreaterThanOrEqualTo")]
    GreaterThanOrEqualTo,
    #[serde(rename = "LessThan")]
    LessThan,
    #[serde(rename = "LessThanOrEqualTo")]
    LessThanOrEqualTo,
    #[serde(rename = "IsNull")]
    IsNull,
    #[serde(rename = "IsNotNull")]
    IsNotNull,
}

impl SearchCondition {
    pub const ALL: [SearchCondition; 12] = [
        SearchCondition::Equals,
        SearchCondition::NotEquals,
        SearchCondition::Contains,
        SearchCondition::ContainsNot,
        SearchCondition::StartsWith,
        SearchCondition::EndsWith,
        SearchCondition::GreaterThan,
        SearchCondition::GreaterThanOrEqualTo,
        SearchCondition::LessThan,
        SearchCondition::LessThanOrEqualTo,
        SearchCondition::IsNull,
        SearchCondition::IsNotNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCondition::Equals => "Equals",
            SearchCondition::NotEquals => "NotEquals",
            SearchCondition::Contains => "Contains",
            SearchCondition::ContainsNot => "ContainsNot",
            SearchCondition::StartsWith => "StartsWith",
            SearchCondition::EndsWith => "EndsWith",
            SearchCondition::GreaterThan => "GreaterThan",
            SearchCondition::GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
            SearchCondition::LessThan => "LessThan",
            SearchCondition::LessThanOrEqualTo => "LessThanOrEqualTo",
            SearchCondition::IsNull => "IsNull",
            SearchCondition::IsNotNull => "IsNotNull",
        }
    }

    /// Conditions that compare by order rather than by string form.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            SearchCondition::GreaterThan
                | SearchCondition::GreaterThanOrEqualTo
                | SearchCondition::LessThan
                | SearchCondition::LessThanOrEqualTo
        )
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
