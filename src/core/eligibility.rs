use crate::core::scoring::calculate_skill_match;
use crate::models::{EligibilityCriteria, EligibilityResult, MatchThresholds, Student, ALL_BRANCHES};

/// Message returned in `recommendations` when every gate passes
pub const ELIGIBLE_MESSAGE: &str = "You meet all eligibility criteria!";

/// Check a student against a job's eligibility criteria with default thresholds
pub fn check_job_eligibility(student: &Student, criteria: &EligibilityCriteria) -> EligibilityResult {
    check_job_eligibility_with(student, criteria, &MatchThresholds::default())
}

/// Check a student against a job's eligibility criteria
///
/// Every rule is evaluated so `reasons` lists all failures at once:
/// 1. CGPA floor
/// 2. Branch allow-list (skipped when it contains "All")
/// 3. Semester allow-list
/// 4. Skill overlap below the advisory threshold (informational, never blocks)
pub fn check_job_eligibility_with(
    student: &Student,
    criteria: &EligibilityCriteria,
    thresholds: &MatchThresholds,
) -> EligibilityResult {
    let mut reasons = Vec::new();
    let mut is_eligible = true;

    // A zero floor is treated as "no floor"
    if let Some(min_cgpa) = criteria.min_cgpa.filter(|min| *min != 0.0) {
        if student.cgpa < min_cgpa {
            is_eligible = false;
            reasons.push(format!(
                "Minimum CGPA required: {} (You have: {})",
                min_cgpa, student.cgpa
            ));
        }
    }

    if let Some(branches) = restricted_branches(criteria) {
        if !branches.contains(&student.branch) {
            is_eligible = false;
            reasons.push(format!(
                "Your branch ({}) is not eligible. Eligible branches: {}",
                student.branch,
                branches.join(", ")
            ));
        }
    }

    if let Some(semesters) = non_empty(criteria.eligible_semesters.as_deref()) {
        if !semesters.contains(&student.semester) {
            is_eligible = false;
            let listed = semesters
                .iter()
                .map(|semester| semester.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            reasons.push(format!(
                "Your semester ({}) is not eligible. Eligible semesters: {}",
                student.semester, listed
            ));
        }
    }

    if let Some(required) = non_empty(criteria.required_skills.as_deref()) {
        let skill_match = calculate_skill_match(&student.skills, required);
        if skill_match.match_percentage < thresholds.skill_advisory_percentage {
            let focus = skill_match
                .missing_skills
                .iter()
                .take(thresholds.max_advisory_skills)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            reasons.push(format!(
                "You match only {}% of required skills. Consider developing: {}",
                skill_match.match_percentage, focus
            ));
        }
    }

    let recommendations = if is_eligible {
        vec![ELIGIBLE_MESSAGE.to_string()]
    } else {
        reasons.clone()
    };

    EligibilityResult {
        is_eligible,
        reasons,
        recommendations,
    }
}

/// Whether a job should be listed for students of `branch`
///
/// Jobs without a branch restriction are open to everyone. A blank branch or
/// the "All" branch lists every job.
pub fn is_open_to_branch(criteria: &EligibilityCriteria, branch: &str) -> bool {
    if branch.is_empty() || branch == ALL_BRANCHES {
        return true;
    }
    match restricted_branches(criteria) {
        Some(branches) => branches.iter().any(|b| b == branch),
        None => true,
    }
}

/// Branch allow-list, or None when the job accepts every branch
#[inline]
fn restricted_branches(criteria: &EligibilityCriteria) -> Option<&[String]> {
    non_empty(criteria.eligible_branches.as_deref())
        .filter(|branches| !branches.iter().any(|b| b == ALL_BRANCHES))
}

#[inline]
fn non_empty<T>(items: Option<&[T]>) -> Option<&[T]> {
    items.filter(|items| !items.is_empty())
}
