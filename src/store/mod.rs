//! Capability interfaces for the managed backend.
//!
//! The document database, blob storage and auth service are external
//! collaborators. The rest of the crate talks to them through these traits
//! so a concrete adapter (Appwrite REST) can be swapped for an in-memory
//! substitute in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

pub mod appwrite;
pub mod fallback;

pub use appwrite::AppwriteClient;
pub use fallback::Catalog;

pub const DB_ID: &str = "vagad-db";
pub const PRODUCTS_COL: &str = "products";
pub const STAYS_COL: &str = "stays";
pub const ITINERARIES_COL: &str = "itineraries";
pub const ARTISANS_COL: &str = "artisans";
pub const EXPERIENCES_COL: &str = "experiences";
pub const DESTINATIONS_COL: &str = "destinations";

/// Subset of the store's query language used by the catalog.
#[derive(Debug, Clone)]
pub enum Query {
    Equal { attribute: String, value: Value },
    Limit(usize),
}

impl Query {
    pub fn equal(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Query::Equal {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn limit(count: usize) -> Self {
        Query::Limit(count)
    }

    /// Appwrite's wire encoding: one JSON object per query.
    pub fn to_wire(&self) -> String {
        match self {
            Query::Equal { attribute, value } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            })
            .to_string(),
            Query::Limit(count) => json!({
                "method": "limit",
                "values": [count],
            })
            .to_string(),
        }
    }
}

/// A raw document as returned by the store. `data` keeps every field,
/// including the store-assigned `$id`, so typed views deserialize directly.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn from_value(data: Value) -> Result<Self> {
        let id = data
            .get("$id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| PlannerError::Store("document missing `$id`".to_string()))?
            .to_string();
        Ok(Self { id, data })
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(PlannerError::from)
    }
}

/// Create/read/list/delete over a document collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_documents(&self, collection_id: &str, queries: &[Query])
        -> Result<Vec<Document>>;

    async fn get_document(&self, collection_id: &str, document_id: &str) -> Result<Document>;

    async fn create_document(&self, collection_id: &str, data: Value) -> Result<Document>;

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> Result<()>;
}

/// Image binaries referenced by URL from document records.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, bucket_id: &str, filename: &str, bytes: Vec<u8>) -> Result<String>;

    /// Public view URL for a stored file.
    fn view_url(&self, bucket_id: &str, file_id: &str) -> String;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
}

/// Session-based email/password auth at the presentation boundary.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn signup(&self, email: &str, password: &str, name: Option<&str>) -> Result<Account>;

    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    async fn logout(&self, session_id: &str) -> Result<()>;
}
