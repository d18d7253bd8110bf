use std::collections::HashSet;

use crate::core::normalizer::normalize_skill;
use crate::models::MatchResult;

/// Score a candidate's skills against a target's required skills
///
/// Comparison is case and whitespace insensitive. The output lists carry the
/// required entries as supplied, in their original order, so callers can show
/// them back with the target's own spelling.
///
/// Scoring formula:
/// match_percentage = round_half_up(100 * total_matched / total_required)
///
/// If either side is empty there is nothing to match: the result is 0% with
/// every required skill reported missing.
pub fn calculate_skill_match<C, R>(candidate_skills: &[C], required_skills: &[R]) -> MatchResult
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return MatchResult {
            match_percentage: 0,
            matched_skills: Vec::new(),
            missing_skills: required_skills.iter().map(|s| s.as_ref().to_string()).collect(),
            total_required: required_skills.len(),
            total_matched: 0,
        };
    }

    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|skill| normalize_skill(skill.as_ref()))
        .collect();

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for skill in required_skills.iter().map(|skill| skill.as_ref()) {
        if candidate.contains(&normalize_skill(skill)) {
            matched_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    let total_required = required_skills.len();
    let total_matched = matched_skills.len();

    MatchResult {
        match_percentage: percentage(total_matched, total_required),
        matched_skills,
        missing_skills,
        total_required,
        total_matched,
    }
}

/// Integer percentage rounded half up; 0 when `total` is 0
#[inline]
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * part + total) / (2 * total);
    rounded.min(100) as u8
}
