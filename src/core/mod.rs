// Core algorithm exports
pub mod eligibility;
pub mod matcher;
pub mod normalizer;
pub mod scoring;
pub mod suggestions;

pub use eligibility::{check_job_eligibility, check_job_eligibility_with, is_open_to_branch, ELIGIBLE_MESSAGE};
pub use matcher::{recommend, Matcher, TopSkillMapping, TopSkillRecommendation};
pub use normalizer::{normalize_skill, normalize_skills};
pub use scoring::calculate_skill_match;
pub use suggestions::{SkillSuggestions, FALLBACK_SUGGESTIONS};
