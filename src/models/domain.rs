use serde::{Deserialize, Deserializer, Serialize};

/// Minimum match percentage a company needs to appear in recommendations
pub const DEFAULT_MIN_MATCH_PERCENTAGE: u8 = 30;

/// Below this match percentage the eligibility check adds a skills advisory
pub const SKILL_ADVISORY_PERCENTAGE: u8 = 50;

/// Number of missing skills named in the skills advisory
pub const MAX_ADVISORY_SKILLS: usize = 3;

/// Branch sentinel meaning "open to every branch"
pub const ALL_BRANCHES: &str = "All";

fn default_true() -> bool { true }

/// Store documents carry unset attributes as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|value| value.unwrap_or(true))
}

/// Student record as stored in the portal's user collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Student {
    #[serde(
        rename(serialize = "id", deserialize = "$id"),
        alias = "id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cgpa: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub branch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "topSkill", default, skip_serializing_if = "Option::is_none")]
    pub top_skill: Option<String>,
}

/// Partner company with the skills it hires for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(
        rename(serialize = "id", deserialize = "$id"),
        alias = "id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "requiredSkills", default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(
        rename = "isActive",
        default = "default_true",
        deserialize_with = "null_as_true"
    )]
    pub is_active: bool,
}

/// Gating criteria attached to a job posting. Every field is optional and an
/// absent field never blocks a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    #[serde(rename = "minCGPA", default, skip_serializing_if = "Option::is_none")]
    pub min_cgpa: Option<f64>,
    #[serde(rename = "eligibleBranches", default, skip_serializing_if = "Option::is_none")]
    pub eligible_branches: Option<Vec<String>>,
    #[serde(rename = "eligibleSemesters", default, skip_serializing_if = "Option::is_none")]
    pub eligible_semesters: Option<Vec<u8>>,
    #[serde(rename = "requiredSkills", default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
}

/// External job posted on behalf of a company
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(
        rename(serialize = "id", deserialize = "$id"),
        alias = "id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        rename = "isActive",
        default = "default_true",
        deserialize_with = "null_as_true"
    )]
    pub is_active: bool,
    #[serde(flatten)]
    pub criteria: EligibilityCriteria,
}

/// College-internal job (teaching assistant, lab assistant, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternalJob {
    #[serde(
        rename(serialize = "id", deserialize = "$id"),
        alias = "id",
        default,
        deserialize_with = "null_as_default"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(
        rename = "isActive",
        default = "default_true",
        deserialize_with = "null_as_true"
    )]
    pub is_active: bool,
    #[serde(
        rename = "eligibilityCriteria",
        default,
        deserialize_with = "null_as_default"
    )]
    pub criteria: EligibilityCriteria,
}

/// Anything a student's skills can be scored against
pub trait SkillTarget {
    fn required_skills(&self) -> &[String];
}

impl SkillTarget for Company {
    fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

impl SkillTarget for JobPosting {
    fn required_skills(&self) -> &[String] {
        self.criteria.required_skills.as_deref().unwrap_or(&[])
    }
}

impl SkillTarget for InternalJob {
    fn required_skills(&self) -> &[String] {
        self.criteria.required_skills.as_deref().unwrap_or(&[])
    }
}

/// Outcome of scoring a skill set against a target's required skills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "totalRequired")]
    pub total_required: usize,
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
}

/// A ranked target paired with its match details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry<T> {
    #[serde(rename = "company")]
    pub target: T,
    #[serde(rename = "matchDetails")]
    pub match_details: MatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of checking a student against a job's criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    #[serde(rename = "isEligible")]
    pub is_eligible: bool,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Job listed for a student together with the student's eligibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobWithEligibility {
    pub job: JobPosting,
    pub eligibility: EligibilityResult,
}

/// Thresholds used by the ranker and the eligibility evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    pub min_match_percentage: u8,
    pub skill_advisory_percentage: u8,
    pub max_advisory_skills: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_match_percentage: DEFAULT_MIN_MATCH_PERCENTAGE,
            skill_advisory_percentage: SKILL_ADVISORY_PERCENTAGE,
            max_advisory_skills: MAX_ADVISORY_SKILLS,
        }
    }
}
