use crate::models::{Company, InternalJob, JobPosting, Student};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Collection IDs in the document store
#[derive(Debug, Clone)]
pub struct StoreCollections {
    pub students: String,
    pub companies: String,
    pub jobs: String,
    pub internal_jobs: String,
}

/// Read-only client for the portal's document store (Appwrite REST API)
///
/// Loads the records the matcher scores:
/// - Student profiles
/// - Active companies
/// - External and internal job postings
pub struct StoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: StoreCollections,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: StoreCollections,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        })
    }

    /// Fetch a student profile by document ID
    pub async fn get_student(&self, student_id: &str) -> Result<Student, StoreError> {
        let doc = self.fetch_document(&self.collections.students, student_id).await?;
        parse_document(&doc, "student")
    }

    /// List active companies
    pub async fn list_companies(&self) -> Result<Vec<Company>, StoreError> {
        let docs = self
            .fetch_documents(&self.collections.companies, &[active_query()])
            .await?;
        Ok(parse_documents(&docs, "company"))
    }

    /// Fetch an external job posting by document ID
    pub async fn get_job(&self, job_id: &str) -> Result<JobPosting, StoreError> {
        let doc = self.fetch_document(&self.collections.jobs, job_id).await?;
        parse_document(&doc, "job")
    }

    /// List active external job postings
    pub async fn list_jobs(&self) -> Result<Vec<JobPosting>, StoreError> {
        let docs = self
            .fetch_documents(&self.collections.jobs, &[active_query()])
            .await?;
        Ok(parse_documents(&docs, "job"))
    }

    /// Fetch a college-internal job by document ID
    pub async fn get_internal_job(&self, job_id: &str) -> Result<InternalJob, StoreError> {
        let doc = self
            .fetch_document(&self.collections.internal_jobs, job_id)
            .await?;
        parse_document(&doc, "internal job")
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    async fn fetch_document(&self, collection: &str, document_id: &str) -> Result<Value, StoreError> {
        let url = format!(
            "{}/{}",
            self.collection_url(collection),
            urlencoding::encode(document_id)
        );

        tracing::debug!("Fetching document {} from {}", document_id, collection);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(format!(
                "Document {} not found in {}",
                document_id, collection
            ))),
            StatusCode::UNAUTHORIZED => Err(StoreError::Unauthorized),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Failed to fetch {} from {}: {} - {}", document_id, collection, status, body);
                Err(StoreError::ApiError(format!(
                    "Failed to fetch document: {}",
                    status
                )))
            }
        }
    }

    async fn fetch_documents(&self, collection: &str, queries: &[String]) -> Result<Vec<Value>, StoreError> {
        // Appwrite query format: JSON array of query strings
        let queries_json = serde_json::to_string(queries)?;
        let url = format!(
            "{}?query={}",
            self.collection_url(collection),
            urlencoding::encode(&queries_json)
        );

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(StoreError::Unauthorized),
            status => {
                return Err(StoreError::ApiError(format!(
                    "Failed to list {}: {}",
                    collection, status
                )))
            }
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .cloned()
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        tracing::debug!("Listed {} documents from {} (total: {})", documents.len(), collection, total);

        Ok(documents)
    }
}

fn active_query() -> String {
    "equal(\"isActive\", true)".to_string()
}

/// Documents may wrap their fields in a `data` object
fn document_body(doc: &Value) -> &Value {
    doc.get("data").filter(|data| data.is_object()).unwrap_or(doc)
}

fn parse_document<T: DeserializeOwned>(doc: &Value, kind: &str) -> Result<T, StoreError> {
    serde_json::from_value(document_body(doc).clone())
        .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse {}: {}", kind, e)))
}

/// Parse every well-formed document, skipping (and logging) malformed ones
fn parse_documents<T: DeserializeOwned>(docs: &[Value], kind: &str) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match parse_document(doc, kind) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Skipping malformed {} document: {}", kind, e);
                None
            }
        })
        .collect()
}
