use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Company, EligibilityCriteria, Student};

/// Request to score one skill set against a requirement list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(alias = "candidate_skills", rename = "candidateSkills", default)]
    pub candidate_skills: Vec<String>,
    #[serde(alias = "required_skills", rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
}

/// Request to rank caller-supplied companies for a skill set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(alias = "candidate_skills", rename = "candidateSkills", default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[validate(range(max = 100))]
    #[serde(alias = "min_match_percentage", rename = "minMatchPercentage", default)]
    pub min_match_percentage: Option<u8>,
}

/// Request to check a student against caller-supplied job criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub student: Student,
    #[serde(default)]
    pub job: EligibilityCriteria,
}

/// Query string for the stored-student recommendation endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationQuery {
    #[validate(range(max = 100))]
    #[serde(alias = "min_match_percentage", rename = "minMatchPercentage", default)]
    pub min_match_percentage: Option<u8>,
}
