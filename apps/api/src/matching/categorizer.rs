//! Categorizer — assigns a scored posting to its output tier.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::{ScoreCard, SkillGate};

/// Output tier for a scored posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BestFit,
    Growth,
    Alternative,
    NoMatch,
}

/// Tier for a posting that passed the skill gate. First rule that holds wins.
pub fn categorize<S>(matching_skills: &[S], related_skills: &[S], opportunity_gap: bool) -> Category {
    if matching_skills.len() >= 3 {
        Category::BestFit
    } else if opportunity_gap {
        Category::Growth
    } else if !matching_skills.is_empty() || related_skills.len() >= 2 {
        Category::BestFit
    } else {
        Category::Alternative
    }
}

/// Tier for any score card; gate rejections short-circuit to `NoMatch`.
pub fn classify(card: &ScoreCard) -> Category {
    match card.gate {
        SkillGate::Rejected => Category::NoMatch,
        SkillGate::Passed | SkillGate::NonSkillOnly => categorize(
            &card.matching_skills,
            &card.related_skills,
            card.opportunity_gap,
        ),
    }
}
