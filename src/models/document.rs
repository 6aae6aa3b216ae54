//! Documents-library model.

use serde::{Deserialize, Serialize};

/// A file in the documents library.
///
/// The bytes live in object storage; this is the metadata row pointing at
/// the public URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DocumentFile {
    /// Unique identifier assigned by the record store
    pub id: i64,

    /// Display title
    pub title: String,

    /// Original file name (also the object key inside the bucket)
    pub file_name: String,

    /// Public download URL
    pub url: String,

    /// MIME type, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// File size in bytes, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,

    /// When the file was uploaded (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}

/// Insert payload for a new document metadata row.
#[derive(Debug, Clone, Serialize)]
pub struct NewDocumentFile {
    pub title: String,
    pub file_name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}
