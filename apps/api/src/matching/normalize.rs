//! Canonical comparison form for free-text attributes and skill tokens.

use std::collections::HashSet;

/// Trims and lower-cases a value. Every comparison in the engine goes through here.
pub fn canonical(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Same as [`canonical`], with an absent value mapped to the empty string.
pub fn canonical_opt(value: Option<&str>) -> String {
    value.map(canonical).unwrap_or_default()
}

/// Canonicalizes a skill list, dropping blanks and keeping first-seen order.
pub fn canonical_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(skills.len());
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let key = canonical(skill.as_ref());
        if !key.is_empty() && seen.insert(key.clone()) {
            out.push(key);
        }
    }
    out
}
