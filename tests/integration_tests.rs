// Integration tests for Placement Match: HTTP routes over a stubbed document store

use actix_web::{http::StatusCode, test, web, App};
use mockito::{Matcher, Server, ServerGuard};
use placement_match::config::{BranchSuggestions, MatchingSettings, TopSkillRule};
use placement_match::error::{handle_json_payload_error, handle_query_payload_error};
use placement_match::routes::{configure_routes, AppState};
use placement_match::services::{StoreClient, StoreCollections};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const DOCS: &str = "/v1/databases/db/collections";

fn app_state(server: &ServerGuard) -> AppState {
    let store = StoreClient::new(
        format!("{}/v1", server.url()),
        "test_key".to_string(),
        "test_project".to_string(),
        "db".to_string(),
        StoreCollections {
            students: "users".to_string(),
            companies: "companies".to_string(),
            jobs: "jobs".to_string(),
            internal_jobs: "internal_jobs".to_string(),
        },
        Duration::from_secs(5),
    )
    .unwrap();

    let matching = MatchingSettings {
        top_skill_companies: vec![TopSkillRule {
            skill: "JavaScript".to_string(),
            company: "Google".to_string(),
        }],
        skill_suggestions: vec![BranchSuggestions {
            branch: "CSE".to_string(),
            skills: vec!["Docker".to_string(), "AWS".to_string()],
        }],
        ..Default::default()
    };

    AppState {
        store: Arc::new(store),
        matcher: matching.matcher(),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

fn student_doc(top_skill: Option<&str>) -> Value {
    let mut doc = json!({
        "$id": "stu_1",
        "name": "Asha",
        "cgpa": 8.2,
        "branch": "CSE",
        "semester": 6,
        "skills": ["Python", "SQL", "react"]
    });
    if let Some(skill) = top_skill {
        doc["topSkill"] = json!(skill);
    }
    doc
}

async fn mock_student(server: &mut ServerGuard, top_skill: Option<&str>) -> mockito::Mock {
    server
        .mock("GET", format!("{}/users/documents/stu_1", DOCS).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(student_doc(top_skill).to_string())
        .create_async()
        .await
}

async fn mock_list(server: &mut ServerGuard, collection: &str, documents: Value) -> mockito::Mock {
    let count = documents.as_array().map(|d| d.len()).unwrap_or(0);
    server
        .mock("GET", format!("{}/{}/documents", DOCS, collection).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "total": count, "documents": documents }).to_string())
        .create_async()
        .await
}

fn companies() -> Value {
    json!([
        { "$id": "c1", "name": "Google India", "requiredSkills": ["Python", "Go"] },
        { "$id": "c2", "name": "Netflix", "requiredSkills": ["SQL", "Python", "React"] },
        { "$id": "c3", "name": "Oracle", "requiredSkills": ["Java"] }
    ])
}

#[actix_web::test]
async fn test_health() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_score_endpoint() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(json!({ "candidateSkills": ["javascript"], "requiredSkills": ["JavaScript", "CSS"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matchPercentage"], 50);
    assert_eq!(body["matchedSkills"], json!(["JavaScript"]));
    assert_eq!(body["missingSkills"], json!(["CSS"]));
    assert_eq!(body["totalRequired"], 2);
}

#[actix_web::test]
async fn test_recommend_endpoint() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::post()
        .uri("/api/v1/match/recommend")
        .set_json(json!({
            "candidateSkills": ["python"],
            "companies": [
                { "id": "a", "name": "A", "requiredSkills": ["Python", "SQL"] },
                { "id": "b", "name": "B", "requiredSkills": ["Java"] }
            ]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["company"]["id"], "a");
    assert_eq!(body["data"][0]["matchDetails"]["matchPercentage"], 50);
}

#[actix_web::test]
async fn test_recommend_rejects_out_of_range_threshold() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::post()
        .uri("/api/v1/match/recommend")
        .set_json(json!({ "candidateSkills": ["python"], "companies": [], "minMatchPercentage": 101 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_reported() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_eligibility_endpoint() {
    let server = Server::new_async().await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::post()
        .uri("/api/v1/match/eligibility")
        .set_json(json!({
            "student": { "cgpa": 6.5, "branch": "ME", "semester": 4, "skills": [] },
            "job": { "minCGPA": 7, "eligibleBranches": ["CSE", "ECE"] }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["isEligible"], false);
    assert_eq!(
        body["reasons"],
        json!([
            "Minimum CGPA required: 7 (You have: 6.5)",
            "Your branch (ME) is not eligible. Eligible branches: CSE, ECE"
        ])
    );
    assert_eq!(body["recommendations"], body["reasons"]);
}

#[actix_web::test]
async fn test_student_recommendations() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["company"]["id"], "c2");
    assert_eq!(body["data"][0]["matchDetails"]["matchPercentage"], 100);
    assert_eq!(body["data"][1]["company"]["id"], "c1");
    assert_eq!(body["data"][1]["matchDetails"]["missingSkills"], json!(["Go"]));
}

#[actix_web::test]
async fn test_student_recommendations_with_threshold() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations?minMatchPercentage=75")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["company"]["name"], "Netflix");
}

#[actix_web::test]
async fn test_student_with_null_skills_gets_empty_recommendations() {
    let mut server = Server::new_async().await;
    let _student = server
        .mock("GET", format!("{}/users/documents/stu_1", DOCS).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "$id": "stu_1",
                "name": "Asha",
                "cgpa": null,
                "branch": null,
                "semester": null,
                "skills": null,
                "topSkill": null
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_company_with_null_skills_scores_zero() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _companies = mock_list(
        &mut server,
        "companies",
        json!([
            { "$id": "c1", "name": "Google India", "requiredSkills": ["Python", "Go"] },
            { "$id": "c9", "name": "Stealth", "requiredSkills": null, "isActive": null }
        ]),
    )
    .await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations?minMatchPercentage=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["company"]["id"], "c1");
    assert_eq!(body["data"][1]["company"]["id"], "c9");
    assert_eq!(body["data"][1]["matchDetails"]["matchPercentage"], 0);
    assert_eq!(body["data"][1]["matchDetails"]["totalRequired"], 0);
}

#[actix_web::test]
async fn test_unknown_student_is_not_found() {
    let mut server = Server::new_async().await;
    let _missing = server
        .mock("GET", format!("{}/users/documents/ghost", DOCS).as_str())
        .with_status(404)
        .with_body(r#"{"message":"Document not found"}"#)
        .create_async()
        .await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/ghost/recommendations")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_top_skill_recommendation() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, Some("JavaScript")).await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations/top-skill")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["company"]["name"], "Google India");
    assert_eq!(body["data"][0]["matchDetails"]["matchPercentage"], 100);
    assert_eq!(body["data"][0]["matchDetails"]["missingSkills"], json!([]));
    assert_eq!(body["data"][0]["reason"], "Perfect match for your top skill: JavaScript");
}

#[actix_web::test]
async fn test_top_skill_unmapped() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, Some("Communication-Soft Skill")).await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations/top-skill")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 0);
    assert_eq!(body["message"], "No specific company recommendation for this skill");
}

#[actix_web::test]
async fn test_top_skill_required() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _companies = mock_list(&mut server, "companies", companies()).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/recommendations/top-skill")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_jobs_for_student() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _jobs = mock_list(
        &mut server,
        "jobs",
        json!([
            { "$id": "j1", "title": "SDE Intern", "minCGPA": 7, "eligibleBranches": ["CSE", "ISE"] },
            { "$id": "j2", "title": "Design Engineer", "eligibleBranches": ["ME"] },
            { "$id": "j3", "title": "Quant", "minCGPA": 9, "eligibleBranches": ["All"] }
        ]),
    )
    .await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/jobs")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["job"]["id"], "j1");
    assert_eq!(body["data"][0]["eligibility"]["isEligible"], true);
    assert_eq!(body["data"][1]["job"]["id"], "j3");
    assert_eq!(body["data"][1]["eligibility"]["isEligible"], false);
}

#[actix_web::test]
async fn test_job_eligibility() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _job = server
        .mock("GET", format!("{}/jobs/documents/j1", DOCS).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "$id": "j1",
                "title": "Platform Engineer",
                "eligibleSemesters": [6, 8],
                "requiredSkills": ["Go", "Kubernetes", "Terraform", "Python"]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/jobs/j1/eligibility")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["studentId"], "stu_1");
    assert_eq!(body["jobId"], "j1");
    assert_eq!(body["isEligible"], true);
    assert_eq!(
        body["reasons"],
        json!(["You match only 25% of required skills. Consider developing: Go, Kubernetes, Terraform"])
    );
    assert_eq!(body["recommendations"], json!(["You meet all eligibility criteria!"]));
}

#[actix_web::test]
async fn test_internal_job_eligibility() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let _job = server
        .mock("GET", format!("{}/internal_jobs/documents/i1", DOCS).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "$id": "i1",
                "title": "Teaching Assistant",
                "eligibilityCriteria": { "eligibleSemesters": [7, 8] }
            })
            .to_string(),
        )
        .create_async()
        .await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/internal-jobs/i1/eligibility")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["isEligible"], false);
    assert_eq!(
        body["reasons"],
        json!(["Your semester (6) is not eligible. Eligible semesters: 7, 8"])
    );
}

#[actix_web::test]
async fn test_skill_suggestions() {
    let mut server = Server::new_async().await;
    let _student = mock_student(&mut server, None).await;
    let app = test_app!(app_state(&server));

    let req = test::TestRequest::get()
        .uri("/api/v1/students/stu_1/skill-suggestions")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["branch"], "CSE");
    assert_eq!(body["data"], json!(["Docker", "AWS"]));
}
