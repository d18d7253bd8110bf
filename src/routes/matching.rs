use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{EligibilityRequest, RecommendRequest, RecommendationsResponse, ScoreRequest};
use crate::routes::AppState;

/// Stateless matching endpoints over caller-supplied records
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/match/score", web::post().to(score_skills))
        .route("/match/recommend", web::post().to(recommend_companies))
        .route("/match/eligibility", web::post().to(check_eligibility));
}

/// Score endpoint
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// {
///   "candidateSkills": ["string"],
///   "requiredSkills": ["string"]
/// }
/// ```
async fn score_skills(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> HttpResponse {
    let result = state.matcher.score(&req.candidate_skills, &req.required_skills);

    tracing::debug!(
        "Scored {} candidate skills against {} required: {}%",
        req.candidate_skills.len(),
        req.required_skills.len(),
        result.match_percentage
    );

    HttpResponse::Ok().json(result)
}

/// Recommend endpoint
///
/// POST /api/v1/match/recommend
///
/// Request body:
/// ```json
/// {
///   "candidateSkills": ["string"],
///   "companies": [{ "id": "string", "name": "string", "requiredSkills": ["string"] }],
///   "minMatchPercentage": 30
/// }
/// ```
async fn recommend_companies(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let RecommendRequest {
        candidate_skills,
        companies,
        min_match_percentage,
    } = req.into_inner();
    let total = companies.len();

    let entries = state
        .matcher
        .recommend(&candidate_skills, companies, min_match_percentage);

    tracing::info!("Recommending {} of {} companies", entries.len(), total);

    Ok(HttpResponse::Ok().json(RecommendationsResponse::new(entries)))
}

/// Eligibility endpoint
///
/// POST /api/v1/match/eligibility
///
/// Request body:
/// ```json
/// {
///   "student": { "cgpa": 8.2, "branch": "CSE", "semester": 6, "skills": ["string"] },
///   "job": { "minCGPA": 7.0, "eligibleBranches": ["CSE"], "eligibleSemesters": [6], "requiredSkills": ["string"] }
/// }
/// ```
async fn check_eligibility(
    state: web::Data<AppState>,
    req: web::Json<EligibilityRequest>,
) -> HttpResponse {
    let result = state.matcher.evaluate(&req.student, &req.job);
    HttpResponse::Ok().json(result)
}
