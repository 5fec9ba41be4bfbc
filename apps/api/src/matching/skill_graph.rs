//! Static skill-relation table.
//!
//! Entries are authored per skill and are not mirrored: `django -> python`
//! does not imply `python -> django` unless both rows say so. The table is
//! built once on first use and never mutated, so concurrent readers need no
//! locking.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

const SKILL_RELATIONS: &[(&str, &[&str])] = &[
    ("html", &["css", "javascript"]),
    ("css", &["html", "javascript"]),
    (
        "javascript",
        &["html", "css", "react", "node.js", "typescript"],
    ),
    ("react", &["javascript", "redux", "node.js"]),
    ("node.js", &["javascript", "express", "mongodb"]),
    ("express", &["node.js", "javascript"]),
    ("mongodb", &["node.js", "express", "sql"]),
    ("sql", &["databases", "mysql", "postgresql"]),
    (
        "python",
        &["pandas", "numpy", "machine learning", "flask", "django"],
    ),
    (
        "machine learning",
        &["python", "data science", "deep learning"],
    ),
    (
        "data science",
        &["python", "pandas", "numpy", "machine learning"],
    ),
    ("deep learning", &["python", "pytorch", "tensorflow"]),
    ("django", &["python"]),
    ("flask", &["python"]),
    ("pandas", &["python", "data science"]),
    ("numpy", &["python", "data science"]),
    ("typescript", &["javascript"]),
];

static SKILL_GRAPH: Lazy<HashMap<&'static str, BTreeSet<&'static str>>> = Lazy::new(|| {
    SKILL_RELATIONS
        .iter()
        .map(|(skill, related)| (*skill, related.iter().copied().collect()))
        .collect()
});

static NO_RELATIONS: BTreeSet<&'static str> = BTreeSet::new();

/// Authored related skills for a canonical skill key. Unknown keys map to the empty set.
pub fn related_of(skill: &str) -> &'static BTreeSet<&'static str> {
    SKILL_GRAPH.get(skill).unwrap_or(&NO_RELATIONS)
}

/// One-hop closure: the union of [`related_of`] over every skill given.
pub fn expand<'a, I>(skills: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    skills
        .into_iter()
        .flat_map(|skill| related_of(skill).iter().copied())
        .collect()
}
