use std::collections::HashMap;

use crate::core::normalizer::normalize_skill;

/// Suggested for branches without a configured list
pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Communication",
    "Problem Solving",
    "Leadership",
    "Project Management",
];

/// Branch -> skills-to-learn table
///
/// Branch lookup ignores case and surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct SkillSuggestions {
    by_branch: HashMap<String, Vec<String>>,
}

impl SkillSuggestions {
    pub fn new<I, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (B, Vec<String>)>,
        B: AsRef<str>,
    {
        let by_branch = entries
            .into_iter()
            .map(|(branch, skills)| (normalize_skill(branch.as_ref()), skills))
            .collect();
        Self { by_branch }
    }

    pub fn for_branch(&self, branch: &str) -> Vec<String> {
        match self.by_branch.get(&normalize_skill(branch)) {
            Some(skills) => skills.clone(),
            None => FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
