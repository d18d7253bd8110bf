// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Company, EligibilityCriteria, EligibilityResult, InternalJob, JobPosting, JobWithEligibility,
    MatchResult, MatchThresholds, RecommendationEntry, SkillTarget, Student, ALL_BRANCHES,
    DEFAULT_MIN_MATCH_PERCENTAGE, MAX_ADVISORY_SKILLS, SKILL_ADVISORY_PERCENTAGE,
};
pub use requests::{EligibilityRequest, RecommendRequest, RecommendationQuery, ScoreRequest};
pub use responses::{
    EligibilityResponse, ErrorResponse, HealthResponse, JobsResponse, RecommendationsResponse,
    SkillSuggestionsResponse,
};
