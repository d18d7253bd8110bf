use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::TopSkillRecommendation;
use crate::error::ApiError;
use crate::models::{
    EligibilityResponse, JobsResponse, RecommendationQuery, RecommendationsResponse,
    SkillSuggestionsResponse,
};
use crate::routes::AppState;

/// Student-scoped endpoints backed by the document store
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/students/{student_id}/recommendations", web::get().to(get_recommendations))
        .route(
            "/students/{student_id}/recommendations/top-skill",
            web::get().to(get_top_skill_recommendation),
        )
        .route("/students/{student_id}/jobs", web::get().to(get_jobs))
        .route(
            "/students/{student_id}/jobs/{job_id}/eligibility",
            web::get().to(get_job_eligibility),
        )
        .route(
            "/students/{student_id}/internal-jobs/{job_id}/eligibility",
            web::get().to(get_internal_job_eligibility),
        )
        .route(
            "/students/{student_id}/skill-suggestions",
            web::get().to(get_skill_suggestions),
        );
}

/// Company recommendations by skill overlap
///
/// GET /api/v1/students/{studentId}/recommendations?minMatchPercentage=30
async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let student_id = path.into_inner();

    let (student, companies) = tokio::try_join!(
        state.store.get_student(&student_id),
        state.store.list_companies(),
    )?;

    let total = companies.len();
    let entries = state
        .matcher
        .recommend(&student.skills, companies, query.min_match_percentage);

    tracing::info!(
        "Returning {} recommendations for student {} (from {} companies)",
        entries.len(),
        student_id,
        total
    );

    let response = if student.skills.is_empty() {
        RecommendationsResponse::new(entries)
            .with_message("Add skills to your profile to get company recommendations")
    } else {
        RecommendationsResponse::new(entries)
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Single company mapped from the student's top skill
///
/// GET /api/v1/students/{studentId}/recommendations/top-skill
async fn get_top_skill_recommendation(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();
    let (student, companies) = tokio::try_join!(
        state.store.get_student(&student_id),
        state.store.list_companies(),
    )?;

    let outcome = state.matcher.recommend_for_top_skill(&student, companies);

    tracing::debug!("Top-skill outcome for {}: {:?}", student_id, outcome);

    let message = outcome.message();
    let response = match outcome {
        TopSkillRecommendation::Matched(entry) => RecommendationsResponse::new(vec![entry]),
        TopSkillRecommendation::MissingTopSkill => return Err(ApiError::MissingTopSkill(message)),
        _ => RecommendationsResponse::new(Vec::new()).with_message(message),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Active jobs open to the student's branch, with eligibility for each
///
/// GET /api/v1/students/{studentId}/jobs
async fn get_jobs(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();

    let (student, jobs) = tokio::try_join!(
        state.store.get_student(&student_id),
        state.store.list_jobs(),
    )?;

    let listed = state.matcher.jobs_for_student(&student, jobs);

    tracing::info!("Listing {} jobs for student {}", listed.len(), student_id);

    Ok(HttpResponse::Ok().json(JobsResponse {
        count: listed.len(),
        data: listed,
    }))
}

/// Eligibility for an external job
///
/// GET /api/v1/students/{studentId}/jobs/{jobId}/eligibility
async fn get_job_eligibility(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (student_id, job_id) = path.into_inner();

    let (student, job) = tokio::try_join!(
        state.store.get_student(&student_id),
        state.store.get_job(&job_id),
    )?;

    let result = state.matcher.evaluate(&student, &job.criteria);

    tracing::info!(
        "Student {} eligibility for job {}: {}",
        student_id,
        job_id,
        result.is_eligible
    );

    Ok(HttpResponse::Ok().json(EligibilityResponse {
        student_id,
        job_id,
        result,
    }))
}

/// Eligibility for a college-internal job
///
/// GET /api/v1/students/{studentId}/internal-jobs/{jobId}/eligibility
async fn get_internal_job_eligibility(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (student_id, job_id) = path.into_inner();

    let (student, job) = tokio::try_join!(
        state.store.get_student(&student_id),
        state.store.get_internal_job(&job_id),
    )?;

    let result = state.matcher.evaluate(&student, &job.criteria);

    tracing::info!(
        "Student {} eligibility for internal job {}: {}",
        student_id,
        job_id,
        result.is_eligible
    );

    Ok(HttpResponse::Ok().json(EligibilityResponse {
        student_id,
        job_id,
        result,
    }))
}

/// Skills worth learning for the student's branch
///
/// GET /api/v1/students/{studentId}/skill-suggestions
async fn get_skill_suggestions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let student = state.store.get_student(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SkillSuggestionsResponse {
        data: state.matcher.suggest_skills(&student.branch),
        branch: student.branch,
    }))
}
