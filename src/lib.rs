//! Placement Match - skill matching service for the college placement portal
//!
//! This library scores student skills against company and job requirements,
//! ranks company recommendations, and evaluates job eligibility
//! (CGPA, branch and semester gates plus a skills advisory).

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{calculate_skill_match, check_job_eligibility, normalize_skills, recommend, Matcher};
pub use models::{Company, EligibilityCriteria, EligibilityResult, MatchResult, RecommendationEntry, Student};
