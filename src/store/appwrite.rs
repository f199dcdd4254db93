//! Appwrite REST adapter for the document store, blob storage and auth
//! capability traits, plus the admin calls the provisioning routine needs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

use super::{Account, AuthService, BlobStore, Document, DocumentStore, Query, Session, DB_ID};

const DEFAULT_ENDPOINT: &str = "https://fra.cloud.appwrite.io/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct AppwriteClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
}

impl AppwriteClient {
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            database_id: DB_ID.to_string(),
        })
    }

    /// Build a client from `APPWRITE_ENDPOINT` / `APPWRITE_PROJECT` /
    /// `APPWRITE_SECRET_KEY`. Missing project or key is a configuration
    /// error; the endpoint has a default.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var("APPWRITE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let project_id = std::env::var("APPWRITE_PROJECT").map_err(|_| {
            PlannerError::Config("APPWRITE_PROJECT environment variable is not set".to_string())
        })?;
        let api_key = std::env::var("APPWRITE_SECRET_KEY").map_err(|_| {
            PlannerError::Config("APPWRITE_SECRET_KEY environment variable is not set".to_string())
        })?;
        Self::new(endpoint, project_id, api_key)
    }

    pub fn with_database(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = database_id.into();
        self
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    fn documents_path(&self, collection_id: &str) -> String {
        format!(
            "databases/{}/collections/{}/documents",
            self.database_id, collection_id
        )
    }

    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| PlannerError::Store(format!("failed to read response: {err}")))?;

        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|err| PlannerError::Store(format!("invalid response JSON: {err}")))?
        };

        if status.is_success() {
            return Ok(body);
        }

        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or(text);

        Err(match status {
            StatusCode::CONFLICT => PlannerError::AlreadyExists(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PlannerError::Auth(message),
            _ => PlannerError::Store(format!("HTTP {status}: {message}")),
        })
    }

    /// POST against an arbitrary API path. Also used by provisioning for
    /// the admin surface (databases, collections, attributes, buckets).
    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let response = self
            .http
            .post(self.url(path))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| PlannerError::Store(format!("request failed: {err}")))?;
        Self::handle_response(response).await
    }

    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let response = self
            .http
            .get(self.url(path))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|err| PlannerError::Store(format!("request failed: {err}")))?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .send()
            .await
            .map_err(|err| PlannerError::Store(format!("request failed: {err}")))?;
        Self::handle_response(response).await.map(|_| ())
    }
}

#[async_trait]
impl DocumentStore for AppwriteClient {
    async fn list_documents(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<Vec<Document>> {
        let params: Vec<(String, String)> = queries
            .iter()
            .map(|q| ("queries[]".to_string(), q.to_wire()))
            .collect();

        let body = self.get(&self.documents_path(collection_id), &params).await?;
        let documents = body
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| PlannerError::Store("list response missing `documents`".to_string()))?;

        documents
            .iter()
            .map(|doc| Document::from_value(doc.clone()))
            .collect()
    }

    async fn get_document(&self, collection_id: &str, document_id: &str) -> Result<Document> {
        let path = format!("{}/{}", self.documents_path(collection_id), document_id);
        let body = self.get(&path, &[]).await?;
        Document::from_value(body)
    }

    async fn create_document(&self, collection_id: &str, data: Value) -> Result<Document> {
        let body = self
            .post(
                &self.documents_path(collection_id),
                json!({ "documentId": "unique()", "data": data }),
            )
            .await?;
        Document::from_value(body)
    }

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> Result<()> {
        let path = format!("{}/{}", self.documents_path(collection_id), document_id);
        self.delete(&path).await
    }
}

#[async_trait]
impl BlobStore for AppwriteClient {
    async fn upload(&self, bucket_id: &str, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("fileId", "unique()")
            .part("file", part);

        let response = self
            .http
            .post(self.url(&format!("storage/buckets/{bucket_id}/files")))
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|err| PlannerError::Store(format!("upload failed: {err}")))?;

        let body = Self::handle_response(response).await?;
        body.get("$id")
            .and_then(|id| id.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| PlannerError::Store("upload response missing `$id`".to_string()))
    }

    fn view_url(&self, bucket_id: &str, file_id: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/view?project={}",
            self.endpoint, bucket_id, file_id, self.project_id
        )
    }
}

#[async_trait]
impl AuthService for AppwriteClient {
    async fn signup(&self, email: &str, password: &str, name: Option<&str>) -> Result<Account> {
        let mut body = json!({
            "userId": "unique()",
            "email": email,
            "password": password,
        });
        if let Some(name) = name {
            body["name"] = json!(name);
        }

        let response = self.post("account", body).await?;
        Ok(Account {
            id: response
                .get("$id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            email: email.to_string(),
            name: name.map(|s| s.to_string()),
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .post(
                "account/sessions/email",
                json!({ "email": email, "password": password }),
            )
            .await?;

        Ok(Session {
            id: response
                .get("$id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            user_id: response
                .get("userId")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }

    async fn logout(&self, session_id: &str) -> Result<()> {
        self.delete(&format!("account/sessions/{session_id}")).await
    }
}
