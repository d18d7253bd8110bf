use std::collections::HashMap;

use crate::core::{
    eligibility::{check_job_eligibility_with, is_open_to_branch},
    normalizer::normalize_skill,
    scoring::calculate_skill_match,
    suggestions::SkillSuggestions,
};
use crate::models::{
    Company, EligibilityCriteria, EligibilityResult, JobPosting, JobWithEligibility, MatchResult,
    MatchThresholds, RecommendationEntry, SkillTarget, Student,
};

/// Rank targets by how well `candidate_skills` covers their required skills
///
/// Targets scoring below `min_match_percentage` are dropped. The rest are
/// sorted by match percentage, highest first; equal scores keep their input
/// order. A candidate without skills gets no recommendations at all.
pub fn recommend<T, S>(
    candidate_skills: &[S],
    targets: Vec<T>,
    min_match_percentage: u8,
) -> Vec<RecommendationEntry<T>>
where
    T: SkillTarget,
    S: AsRef<str>,
{
    if candidate_skills.is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<RecommendationEntry<T>> = targets
        .into_iter()
        .filter_map(|target| {
            let match_details = calculate_skill_match(candidate_skills, target.required_skills());
            if match_details.match_percentage >= min_match_percentage {
                Some(RecommendationEntry {
                    target,
                    match_details,
                    reason: None,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable, ties stay in input order
    entries.sort_by(|a, b| {
        b.match_details
            .match_percentage
            .cmp(&a.match_details.match_percentage)
    });

    entries
}

/// Configured "top skill -> company name" table
///
/// Skill lookup ignores case and surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct TopSkillMapping {
    companies: HashMap<String, String>,
}

impl TopSkillMapping {
    pub fn new<I, S, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: Into<String>,
    {
        let companies = entries
            .into_iter()
            .map(|(skill, company)| (normalize_skill(skill.as_ref()), company.into()))
            .collect();
        Self { companies }
    }

    pub fn company_for(&self, skill: &str) -> Option<&str> {
        self.companies.get(&normalize_skill(skill)).map(String::as_str)
    }
}

/// Outcome of a top-skill recommendation
#[derive(Debug, Clone)]
pub enum TopSkillRecommendation {
    /// The student has not picked a top skill
    MissingTopSkill,
    /// The top skill has no company in the mapping
    Unmapped { skill: String },
    /// The mapped company is not among the known companies
    CompanyNotFound { company: String },
    Matched(RecommendationEntry<Company>),
}

impl TopSkillRecommendation {
    pub fn message(&self) -> String {
        match self {
            Self::MissingTopSkill => {
                "Please select your top skill in your profile to get company recommendations"
                    .to_string()
            }
            Self::Unmapped { .. } => "No specific company recommendation for this skill".to_string(),
            Self::CompanyNotFound { company } => {
                format!("{} not found in database. Please add it.", company)
            }
            Self::Matched(entry) => entry
                .reason
                .clone()
                .unwrap_or_else(|| format!("Recommended: {}", entry.target.name)),
        }
    }

    pub fn into_entries(self) -> Vec<RecommendationEntry<Company>> {
        match self {
            Self::Matched(entry) => vec![entry],
            _ => Vec::new(),
        }
    }
}

/// Matching facade shared by the request handlers
///
/// Bundles the configured thresholds and lookup tables; every operation is a
/// pure computation over the arguments.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    thresholds: MatchThresholds,
    top_skills: TopSkillMapping,
    suggestions: SkillSuggestions,
}

impl Matcher {
    pub fn new(
        thresholds: MatchThresholds,
        top_skills: TopSkillMapping,
        suggestions: SkillSuggestions,
    ) -> Self {
        Self {
            thresholds,
            top_skills,
            suggestions,
        }
    }

    pub fn with_thresholds(thresholds: MatchThresholds) -> Self {
        Self {
            thresholds,
            ..Default::default()
        }
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    pub fn score<C: AsRef<str>, R: AsRef<str>>(&self, candidate: &[C], required: &[R]) -> MatchResult {
        calculate_skill_match(candidate, required)
    }

    /// Rank targets for a candidate, using the configured threshold unless
    /// one is given
    pub fn recommend<T: SkillTarget, S: AsRef<str>>(
        &self,
        candidate_skills: &[S],
        targets: Vec<T>,
        min_match_percentage: Option<u8>,
    ) -> Vec<RecommendationEntry<T>> {
        let threshold = min_match_percentage.unwrap_or(self.thresholds.min_match_percentage);
        recommend(candidate_skills, targets, threshold)
    }

    /// Recommend the single company mapped to the student's top skill
    ///
    /// Company names match case-insensitively on substring, so "Google"
    /// finds "Google India".
    pub fn recommend_for_top_skill(
        &self,
        student: &Student,
        companies: Vec<Company>,
    ) -> TopSkillRecommendation {
        let skill = match student.top_skill.as_deref().map(str::trim) {
            Some(skill) if !skill.is_empty() => skill,
            _ => return TopSkillRecommendation::MissingTopSkill,
        };

        let company_name = match self.top_skills.company_for(skill) {
            Some(name) => name,
            None => {
                return TopSkillRecommendation::Unmapped {
                    skill: skill.to_string(),
                }
            }
        };

        let needle = company_name.to_lowercase();
        let company = companies
            .into_iter()
            .find(|company| company.name.to_lowercase().contains(&needle));

        match company {
            Some(company) => {
                // The mapped company stands in for a target requiring exactly the top skill
                let pinned = [skill];
                TopSkillRecommendation::Matched(RecommendationEntry {
                    target: company,
                    match_details: calculate_skill_match(&pinned, &pinned),
                    reason: Some(format!("Perfect match for your top skill: {}", skill)),
                })
            }
            None => TopSkillRecommendation::CompanyNotFound {
                company: company_name.to_string(),
            },
        }
    }

    pub fn evaluate(&self, student: &Student, criteria: &EligibilityCriteria) -> EligibilityResult {
        check_job_eligibility_with(student, criteria, &self.thresholds)
    }

    /// Active jobs open to the student's branch, each with the student's eligibility
    pub fn jobs_for_student(&self, student: &Student, jobs: Vec<JobPosting>) -> Vec<JobWithEligibility> {
        jobs.into_iter()
            .filter(|job| job.is_active && is_open_to_branch(&job.criteria, &student.branch))
            .map(|job| {
                let eligibility = self.evaluate(student, &job.criteria);
                JobWithEligibility { job, eligibility }
            })
            .collect()
    }

    pub fn suggest_skills(&self, branch: &str) -> Vec<String> {
        self.suggestions.for_branch(branch)
    }
}
