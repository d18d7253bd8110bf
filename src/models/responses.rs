use serde::{Deserialize, Serialize};

use crate::models::domain::{EligibilityResult, JobWithEligibility, RecommendationEntry};

/// Ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse<T> {
    pub count: usize,
    pub data: Vec<RecommendationEntry<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> RecommendationsResponse<T> {
    pub fn new(data: Vec<RecommendationEntry<T>>) -> Self {
        Self {
            count: data.len(),
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Eligibility of a stored student for a stored job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResponse {
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(flatten)]
    pub result: EligibilityResult,
}

/// Jobs listed for a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub count: usize,
    pub data: Vec<JobWithEligibility>,
}

/// Skills suggested for a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestionsResponse {
    pub branch: String,
    pub data: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
