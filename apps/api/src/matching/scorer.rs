//! Scorer — point-based match between one profile and one posting.
//!
//! Weights:
//! - +2 per exact skill match
//! - +min(|related|, |matching|) for related skills
//! - +2 each for education / department / sector
//! - +1 location, only alongside a skill signal
//! - +1 opportunity gap (1–2 missing skills while otherwise aligned)
//!
//! A posting with no exact or related skill overlap is gated out with a score
//! of 0, unless education, department and sector all match, which earns a
//! single point. Every point award appends its reason in the same step, so
//! the score and its explanation cannot drift apart.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::matching::normalize::{canonical, canonical_opt, canonical_skills};
use crate::matching::skill_graph;
use crate::models::posting::Posting;
use crate::models::profile::UserProfile;

// ────────────────────────────────────────────────────────────────────────────
// Signals
// ────────────────────────────────────────────────────────────────────────────

pub const SKILL_MATCH_POINTS: u32 = 2;
pub const FIELD_MATCH_POINTS: u32 = 2;
pub const LOCATION_POINTS: u32 = 1;
pub const OPPORTUNITY_GAP_POINTS: u32 = 1;
pub const NON_SKILL_MATCH_POINTS: u32 = 1;
pub const MAX_GAP_SKILLS: usize = 2;

pub const NON_SKILL_MATCH_REASON: &str = "perfect non-skill match";

/// Outcome of the skill gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillGate {
    /// At least one exact or related skill overlaps.
    Passed,
    /// No skill overlap, but education, department and sector all match.
    NonSkillOnly,
    /// No skill overlap and the non-skill fields are not all aligned.
    Rejected,
}

/// Which non-skill attributes match (both sides non-empty and equal after canonicalization).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMatches {
    pub education: bool,
    pub department: bool,
    pub sector: bool,
    pub location: bool,
}

impl FieldMatches {
    pub fn between(profile: &PreparedProfile, posting: &Posting) -> Self {
        Self {
            education: same(&profile.education, posting.education.as_deref()),
            department: same(&profile.department, posting.department.as_deref()),
            sector: same(&profile.sector, posting.sector.as_deref()),
            location: same(&profile.location, posting.location.as_deref()),
        }
    }

    pub fn all_academic(&self) -> bool {
        self.education && self.department && self.sector
    }
}

fn same(canonical_profile: &str, posting: Option<&str>) -> bool {
    !canonical_profile.is_empty() && canonical_profile == canonical_opt(posting)
}

/// Canonical view of a profile, built once per request and shared by every posting.
#[derive(Debug, Clone, Default)]
pub struct PreparedProfile {
    skills: HashSet<String>,
    expanded: BTreeSet<&'static str>,
    education: String,
    department: String,
    sector: String,
    location: String,
}

impl PreparedProfile {
    pub fn new(profile: &UserProfile) -> Self {
        let skills: HashSet<String> = profile
            .skills
            .iter()
            .map(|s| canonical(s))
            .filter(|s| !s.is_empty())
            .collect();
        let expanded = skill_graph::expand(skills.iter().map(String::as_str));

        Self {
            skills,
            expanded,
            education: canonical_opt(profile.education.as_deref()),
            department: canonical_opt(profile.department.as_deref()),
            sector: canonical_opt(profile.sector.as_deref()),
            location: canonical_opt(profile.location.as_deref()),
        }
    }
}

/// Everything the scorer derived for one (profile, posting) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub reasons: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub related_skills: Vec<String>,
    pub opportunity_gap: bool,
    pub fields: FieldMatches,
    pub gate: SkillGate,
}

impl ScoreCard {
    pub fn has_skill_signal(&self) -> bool {
        !self.matching_skills.is_empty() || !self.related_skills.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Running score with its reasons, appended together.
#[derive(Default)]
struct Tally {
    score: u32,
    reasons: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: u32, reason: String) {
        self.score += points;
        self.reasons.push(reason);
    }
}

/// Scores one posting against a raw profile.
#[cfg(test)]
pub fn score_posting(profile: &UserProfile, posting: &Posting) -> ScoreCard {
    score_prepared(&PreparedProfile::new(profile), posting)
}

/// Scores one posting against an already canonicalized profile.
pub fn score_prepared(profile: &PreparedProfile, posting: &Posting) -> ScoreCard {
    let posting_skills = canonical_skills(&posting.skills);

    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = posting_skills
        .iter()
        .cloned()
        .partition(|s| profile.skills.contains(s));
    let related_skills: Vec<String> = posting_skills
        .iter()
        .filter(|s| profile.expanded.contains(s.as_str()))
        .cloned()
        .collect();

    let fields = FieldMatches::between(profile, posting);

    let mut card = ScoreCard {
        score: 0,
        reasons: Vec::new(),
        matching_skills,
        missing_skills,
        related_skills,
        opportunity_gap: false,
        fields,
        gate: SkillGate::Passed,
    };

    if !card.has_skill_signal() {
        if fields.all_academic() {
            card.score = NON_SKILL_MATCH_POINTS;
            card.reasons.push(NON_SKILL_MATCH_REASON.to_string());
            card.gate = SkillGate::NonSkillOnly;
        } else {
            card.gate = SkillGate::Rejected;
        }
        return card;
    }

    let matched = card.matching_skills.len();
    let related = card.related_skills.len();
    let mut tally = Tally::default();

    if matched > 0 {
        tally.award(
            SKILL_MATCH_POINTS * matched as u32,
            format!("Skill match: {}", card.matching_skills.join(", ")),
        );
    }
    if related > 0 {
        tally.award(
            related.min(matched) as u32,
            format!("Related skills: {}", card.related_skills.join(", ")),
        );
    }
    if fields.education {
        tally.award(
            FIELD_MATCH_POINTS,
            format!("Education matches: {}", display(posting.education.as_deref())),
        );
    }
    if fields.department {
        tally.award(
            FIELD_MATCH_POINTS,
            format!("Department matches: {}", display(posting.department.as_deref())),
        );
    }
    if fields.sector {
        tally.award(
            FIELD_MATCH_POINTS,
            format!("Sector matches: {}", display(posting.sector.as_deref())),
        );
    }
    if fields.location && card.has_skill_signal() {
        tally.award(
            LOCATION_POINTS,
            format!("Location matches: {}", display(posting.location.as_deref())),
        );
    }

    let gap = card.missing_skills.len();
    card.opportunity_gap =
        (1..=MAX_GAP_SKILLS).contains(&gap) && (matched > 0 || fields.sector || fields.department);
    if card.opportunity_gap {
        tally.award(
            OPPORTUNITY_GAP_POINTS,
            format!(
                "Growth potential: add {} to qualify fully",
                card.missing_skills.join(", ")
            ),
        );
    }

    card.score = tally.score;
    card.reasons = tally.reasons;
    card
}

/// Posting-side value as stored, trimmed, for user-facing text.
pub(crate) fn display(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
