/// Canonicalize raw skill strings for comparison
///
/// Trims surrounding whitespace and lowercases each entry. Order, length and
/// duplicates are preserved; an empty string stays empty.
pub fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills.iter().map(|skill| normalize_skill(skill.as_ref())).collect()
}

#[inline]
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}
