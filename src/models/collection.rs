//! Collections, source documents and their semantic cells

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::Resource;
use crate::error::ViewResult;
use crate::filter::FieldValue;
use crate::validate::{require_non_empty, Validate};

/// A searchable group of source documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Collection {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    pub name: String,
    pub allow_overwrites: bool,
    pub additional_data: Option<String>,
    pub created_utc: DateTime<Utc>,
}

impl Collection {
    pub fn new(name: &str) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            allow_overwrites: true,
            created_utc: Utc::now(),
            ..Self::default()
        }
    }
}

impl Validate for Collection {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("Name", &self.name)
    }
}

impl Resource for Collection {
    const PATH: &'static str = "collections";

    fn guid(&self) -> Uuid {
        self.guid
    }
}

/// A processed object recorded in a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceDocument {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "TenantGUID")]
    pub tenant_guid: Uuid,
    #[serde(rename = "BucketGUID")]
    pub bucket_guid: Option<Uuid>,
    #[serde(rename = "CollectionGUID")]
    pub collection_guid: Uuid,
    #[serde(rename = "ObjectGUID")]
    pub object_guid: Option<Uuid>,
    #[serde(rename = "DataRepositoryGUID")]
    pub data_repository_guid: Option<Uuid>,
    pub object_key: String,
    pub object_version: Option<String>,
    pub content_type: String,
    pub document_type: Option<String>,
    pub source_url: Option<String>,
    pub content_length: i64,
    #[serde(rename = "MD5Hash")]
    pub md5_hash: Option<String>,
    #[serde(rename = "SHA1Hash")]
    pub sha1_hash: Option<String>,
    #[serde(rename = "SHA256Hash")]
    pub sha256_hash: Option<String>,
    /// Relevance assigned by a search, absent otherwise
    pub score: Option<f64>,
    pub created_utc: DateTime<Utc>,
}

impl SourceDocument {
    /// Field values addressable by search filters, keyed by wire name.
    /// Unset optional fields are omitted and therefore evaluate as null.
    pub fn field_values(&self) -> HashMap<String, FieldValue> {
        let mut fields = HashMap::new();
        fields.insert("GUID".to_string(), FieldValue::from(self.guid.to_string()));
        fields.insert("CollectionGUID".to_string(), FieldValue::from(self.collection_guid.to_string()));
        fields.insert("ObjectKey".to_string(), FieldValue::from(self.object_key.as_str()));
        fields.insert("ContentType".to_string(), FieldValue::from(self.content_type.as_str()));
        fields.insert("ContentLength".to_string(), FieldValue::from(self.content_length));
        fields.insert("CreatedUtc".to_string(), FieldValue::from(self.created_utc));

        let optional = [
            ("ObjectVersion", &self.object_version),
            ("DocumentType", &self.document_type),
            ("SourceUrl", &self.source_url),
            ("MD5Hash", &self.md5_hash),
            ("SHA1Hash", &self.sha1_hash),
            ("SHA256Hash", &self.sha256_hash),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                fields.insert(name.to_string(), FieldValue::from(value.as_str()));
            }
        }
        if let Some(bucket) = self.bucket_guid {
            fields.insert("BucketGUID".to_string(), FieldValue::from(bucket.to_string()));
        }
        if let Some(score) = self.score {
            fields.insert("Score".to_string(), FieldValue::from(score));
        }
        fields
    }
}

impl Validate for SourceDocument {
    fn validate(&self) -> ViewResult<()> {
        require_non_empty("ObjectKey", &self.object_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SemanticCellType {
    #[default]
    #[serde(rename = "Text")]
    Text,
    #[serde(rename = "Table")]
    Table,
    #[serde(rename = "List")]
    List,
    #[serde(rename = "Image")]
    Image,
    #[serde(rename = "Code")]
    Code,
    #[serde(rename = "Hyperlink")]
    Hyperlink,
    #[serde(rename = "Meta")]
    Meta,
    #[serde(rename = "Binary")]
    Binary,
    #[serde(rename = "Unknown")]
    Unknown,
}

/// A structural region of a document (paragraph, table, list, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SemanticCell {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    pub cell_type: SemanticCellType,
    #[serde(rename = "MD5Hash")]
    pub md5_hash: Option<String>,
    #[serde(rename = "SHA1Hash")]
    pub sha1_hash: Option<String>,
    #[serde(rename = "SHA256Hash")]
    pub sha256_hash: Option<String>,
    pub position: i32,
    pub length: i64,
    pub chunks: Vec<SemanticChunk>,
    pub children: Vec<SemanticCell>,
}

impl SemanticCell {
    /// All chunks of this cell and its descendants, depth first.
    pub fn all_chunks(&self) -> Vec<&SemanticChunk> {
        let mut chunks: Vec<&SemanticChunk> = self.chunks.iter().collect();
        for child in &self.children {
            chunks.extend(child.all_chunks());
        }
        chunks
    }
}

/// A slice of cell content with its embeddings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SemanticChunk {
    #[serde(rename = "GUID")]
    pub guid: Uuid,
    #[serde(rename = "MD5Hash")]
    pub md5_hash: Option<String>,
    #[serde(rename = "SHA1Hash")]
    pub sha1_hash: Option<String>,
    #[serde(rename = "SHA256Hash")]
    pub sha256_hash: Option<String>,
    pub position: i32,
    pub start: i64,
    pub end: i64,
    pub length: i64,
    pub content: String,
    pub embeddings: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_field_values() {
        let mut doc = SourceDocument::default();
        doc.object_key = "reports/q1.pdf".to_string();
        doc.content_type = "application/pdf".to_string();
        doc.content_length = 4096;
        doc.md5_hash = Some("d41d8cd98f00b204e9800998ecf8427e".to_string());

        let fields = doc.field_values();
        assert_eq!(fields["ObjectKey"], FieldValue::from("reports/q1.pdf"));
        assert_eq!(fields["ContentLength"], FieldValue::Integer(4096));
        assert!(fields.contains_key("MD5Hash"));
        assert!(!fields.contains_key("SHA256Hash"));
        assert!(!fields.contains_key("Score"));
    }

    #[test]
    fn test_nested_cells() {
        let json = r#"{
            "GUID": "11111111-1111-1111-1111-111111111111",
            "CellType": "Table",
            "Position": 0,
            "Chunks": [{"Content": "header", "Embeddings": [0.1, 0.2]}],
            "Children": [
                {"CellType": "Text", "Chunks": [{"Content": "row 1"}, {"Content": "row 2"}]}
            ]
        }"#;
        let cell: SemanticCell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.cell_type, SemanticCellType::Table);
        let contents: Vec<&str> = cell.all_chunks().iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["header", "row 1", "row 2"]);
        assert_eq!(cell.chunks[0].embeddings, vec![0.1, 0.2]);
    }

    #[test]
    fn test_collection_guard() {
        assert!(Collection::new("docs").validate().is_ok());
        assert!(Collection::new(" ").validate().is_err());
    }
}
