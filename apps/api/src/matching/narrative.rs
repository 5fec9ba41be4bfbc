//! Narrative generator — prose explanations shown next to the terse reasons.
//!
//! Keyed off the same signals the scorer computed; no randomness.

use serde::{Deserialize, Serialize};

use crate::matching::normalize::canonical_opt;
use crate::matching::scorer::{display, ScoreCard};
use crate::models::posting::Posting;

/// Stipend thresholds for the compensation sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StipendTiers {
    pub high: u64,
    pub mid: u64,
}

impl Default for StipendTiers {
    fn default() -> Self {
        Self {
            high: 25_000,
            mid: 15_000,
        }
    }
}

/// Sector-specific closing lines, keyed by canonical sector.
const SECTOR_LINES: &[(&str, &str)] = &[
    (
        "technology",
        "Time in the tech sector sharpens your digital toolkit and market value.",
    ),
    (
        "finance",
        "Finance exposure builds the analytical and business judgement employers look for.",
    ),
    (
        "healthcare",
        "Healthcare work gives you first-hand insight into the industry's real problems.",
    ),
];

pub fn narrate(posting: &Posting, card: &ScoreCard, tiers: &StipendTiers) -> Vec<String> {
    let mut lines = Vec::new();
    let matched = &card.matching_skills;

    match matched.len() {
        0 => {}
        1 => lines.push(format!(
            "Good foundation with {}: this role builds directly on it.",
            matched[0]
        )),
        2 => lines.push(format!(
            "You already bring {} and {}, so you are well prepared for this role.",
            matched[0], matched[1]
        )),
        _ => lines.push(format!(
            "Excellent alignment: {} are core requirements you already have.",
            matched[..3].join(", ")
        )),
    }

    if !card.related_skills.is_empty() {
        lines.push(format!(
            "Your skills carry over to {}, a short step from what you know.",
            card.related_skills.join(", ")
        ));
    }

    let fields = &card.fields;
    if fields.education {
        lines.push(format!(
            "Your {} background is the foundation this internship expects.",
            display(posting.education.as_deref())
        ));
    }
    if fields.department {
        lines.push(format!(
            "Your {} specialization lines up with this opportunity.",
            display(posting.department.as_deref())
        ));
    }
    if fields.sector {
        lines.push(format!(
            "This {} role fits your sector interest.",
            display(posting.sector.as_deref())
        ));
    }
    if fields.location && card.has_skill_signal() {
        lines.push(format!(
            "It is based in {}, so no relocation is needed.",
            display(posting.location.as_deref())
        ));
    }

    if posting.stipend >= tiers.high {
        lines.push(format!(
            "A stipend of ₹{} makes this a financially rewarding option.",
            posting.stipend
        ));
    } else if posting.stipend >= tiers.mid {
        lines.push(format!(
            "A stipend of ₹{} offers fair pay while you learn.",
            posting.stipend
        ));
    }

    if card.opportunity_gap {
        lines.push(format!(
            "Stretch opportunity: pick up {} to become fully qualified.",
            card.missing_skills.join(", ")
        ));
    }

    let sector = canonical_opt(posting.sector.as_deref());
    if let Some((_, line)) = SECTOR_LINES.iter().find(|(key, _)| *key == sector) {
        lines.push(line.to_string());
    }

    lines
}
