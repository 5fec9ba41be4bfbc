//! Recommendation pipeline: score → filter → categorize → sort → tier.
//!
//! Scoring is a parallel map over the catalog; the sort runs once on the
//! complete scored set. Nothing here is shared between requests.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::matching::categorizer::{classify, Category};
use crate::matching::learning_paths::{suggest_learning_paths, LearningPath};
use crate::matching::narrative::{narrate, StipendTiers};
use crate::matching::ranker::{rank, ScoredPosting};
use crate::matching::scorer::{score_prepared, PreparedProfile};
use crate::models::posting::Posting;
use crate::models::profile::UserProfile;

/// Maximum entries per tier.
pub const TIER_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Recommendations {
    pub best_fit: Vec<ScoredPosting>,
    pub growth: Vec<ScoredPosting>,
    pub alternative: Vec<ScoredPosting>,
    #[serde(rename = "learningPaths")]
    pub learning_paths: Vec<LearningPath>,
}

/// Scores, narrates and categorizes a single posting.
pub fn evaluate(profile: &PreparedProfile, posting: Posting, tiers: &StipendTiers) -> ScoredPosting {
    let card = score_prepared(profile, &posting);
    let category = classify(&card);
    let narratives = if category == Category::NoMatch {
        Vec::new()
    } else {
        narrate(&posting, &card, tiers)
    };

    ScoredPosting {
        posting,
        score: card.score,
        reasons: card.reasons,
        narratives,
        category,
        matching_skills: card.matching_skills,
        missing_skills: card.missing_skills,
        related_skills: card.related_skills,
    }
}

pub fn recommend(
    profile: &UserProfile,
    postings: Vec<Posting>,
    tiers: &StipendTiers,
) -> Recommendations {
    let candidates = postings.len();
    let prepared = PreparedProfile::new(profile);

    // Indexed parallel collect keeps catalog order, which the stable sort relies on.
    let scored: Vec<ScoredPosting> = postings
        .into_par_iter()
        .map(|posting| evaluate(&prepared, posting, tiers))
        .collect();

    let ranked = rank(scored);
    let survivors = ranked.len();

    let mut out = Recommendations::default();
    for entry in ranked {
        let bucket = match entry.category {
            Category::BestFit => &mut out.best_fit,
            Category::Growth => &mut out.growth,
            Category::Alternative => &mut out.alternative,
            Category::NoMatch => continue,
        };
        if bucket.len() < TIER_LIMIT {
            bucket.push(entry);
        }
    }

    if out.best_fit.is_empty() && out.growth.is_empty() {
        out.learning_paths = suggest_learning_paths(profile);
    }

    debug!(
        candidates,
        survivors,
        best_fit = out.best_fit.len(),
        growth = out.growth.len(),
        alternative = out.alternative.len(),
        learning_paths = out.learning_paths.len(),
        "Recommendation pipeline finished"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_postings;
    use proptest::prelude::*;

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn titled(title: &str, skills: &[&str]) -> Posting {
        let mut posting = Posting {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        posting
            .details
            .insert("title".to_string(), serde_json::json!(title));
        posting
    }

    fn all_entries(recs: &Recommendations) -> impl Iterator<Item = &ScoredPosting> {
        recs.best_fit
            .iter()
            .chain(recs.growth.iter())
            .chain(recs.alternative.iter())
    }

    #[test]
    fn test_empty_profile_matches_nothing() {
        let recs = recommend(
            &UserProfile::default(),
            sample_postings(),
            &StipendTiers::default(),
        );
        assert_eq!(all_entries(&recs).count(), 0);
        assert_eq!(
            recs.learning_paths
                .iter()
                .map(|p| p.title)
                .collect::<Vec<_>>(),
            vec!["Project Management Fundamentals"]
        );
    }

    #[test]
    fn test_rejected_postings_excluded_from_every_tier() {
        let recs = recommend(
            &profile(&["python"]),
            vec![titled("match", &["python"]), titled("nope", &["figma"])],
            &StipendTiers::default(),
        );
        let titles: Vec<_> = all_entries(&recs)
            .map(|s| s.posting.detail_str("title").unwrap())
            .collect();
        assert_eq!(titles, vec!["match"]);
    }

    #[test]
    fn test_no_match_entries_have_no_narratives() {
        let scored = evaluate(
            &PreparedProfile::new(&profile(&["python"])),
            titled("nope", &["figma"]),
            &StipendTiers::default(),
        );
        assert_eq!(scored.category, Category::NoMatch);
        assert!(scored.narratives.is_empty());
        assert!(scored.reasons.is_empty());
        assert_eq!(scored.score, 0);
    }

    #[test]
    fn test_tiers_capped_at_limit() {
        let postings: Vec<Posting> = (0..25)
            .map(|i| titled(&format!("p{i}"), &["sql"]))
            .collect();
        let recs = recommend(&profile(&["sql"]), postings, &StipendTiers::default());
        assert_eq!(recs.best_fit.len(), TIER_LIMIT);
        // stable: first ten catalog entries win the tie
        assert_eq!(recs.best_fit[0].posting.detail_str("title"), Some("p0"));
        assert_eq!(recs.best_fit[9].posting.detail_str("title"), Some("p9"));
        assert!(recs.learning_paths.is_empty());
    }

    #[test]
    fn test_sample_catalog_for_web_developer() {
        let user = UserProfile {
            education: Some("B.Tech".to_string()),
            department: Some("CSE".to_string()),
            sector: Some("Technology".to_string()),
            location: Some("Bangalore".to_string()),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Python".to_string(),
            ],
        };
        let recs = recommend(&user, sample_postings(), &StipendTiers::default());

        // Software Development Intern: 3 exact matches → best fit on top
        let top = &recs.best_fit[0];
        assert_eq!(
            top.posting.detail_str("title"),
            Some("Software Development Intern")
        );
        assert_eq!(top.matching_skills, vec!["python", "javascript", "react"]);
        assert!(all_entries(&recs).all(|s| s.score > 0));
        assert!(all_entries(&recs).all(|s| s.category != Category::NoMatch));
        assert!(all_entries(&recs)
            .all(|s| s.posting.detail_str("title") != Some("Finance Intern")));
    }

    #[test]
    fn test_python_sql_example_is_best_fit() {
        let user = UserProfile {
            sector: Some("Technology".to_string()),
            ..profile(&["python", "sql"])
        };
        let post = Posting {
            sector: Some("Technology".to_string()),
            stipend: 25_000,
            ..titled("Backend Intern", &["python", "django", "sql"])
        };
        let scored = evaluate(&PreparedProfile::new(&user), post, &StipendTiers::default());
        assert_eq!(scored.matching_skills, vec!["python", "sql"]);
        // a single missing skill with exact matches opens the gap → growth tier
        assert_eq!(scored.category, Category::Growth);
        assert!(scored.narratives.iter().any(|n| n.contains("₹25000")));

        // without the one-hop missing skill the pair lands in best fit
        let post = Posting {
            sector: Some("Technology".to_string()),
            stipend: 25_000,
            ..titled("Backend Intern", &["python", "sql"])
        };
        let scored = evaluate(&PreparedProfile::new(&user), post, &StipendTiers::default());
        assert_eq!(scored.category, Category::BestFit);
        assert_eq!(scored.score, 2 * 2 + 2);
    }

    #[test]
    fn test_huge_profile_is_scored_quickly() {
        let mut skills: Vec<String> = (0..40_000).map(|i| format!("skill-{i}")).collect();
        skills.push("Python".to_string());
        let user = UserProfile {
            skills,
            ..Default::default()
        };

        let started = std::time::Instant::now();
        let recs = recommend(&user, sample_postings(), &StipendTiers::default());
        assert!(started.elapsed().as_secs() < 5, "took {:?}", started.elapsed());

        assert!(recs.best_fit.iter().any(|s| {
            s.posting.detail_str("title") == Some("Data Science Intern")
                && s.matching_skills == vec!["python"]
        }));
    }

    const SKILL_POOL: &[&str] = &[
        "python", "sql", "django", "pandas", "react", "javascript", "excel", "figma",
    ];

    fn arb_posting() -> impl Strategy<Value = Posting> {
        (
            proptest::collection::vec(0..SKILL_POOL.len(), 0..5),
            0_u64..40_000,
            any::<bool>(),
        )
            .prop_map(|(idx, stipend, tech)| Posting {
                skills: idx.iter().map(|i| SKILL_POOL[*i].to_string()).collect(),
                stipend,
                sector: Some(if tech { "Technology" } else { "Finance" }.to_string()),
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_recommend_is_deterministic_and_sorted(
            postings in proptest::collection::vec(arb_posting(), 0..40),
            skills in proptest::collection::vec(0..SKILL_POOL.len(), 0..4),
        ) {
            let user = UserProfile {
                sector: Some("Technology".to_string()),
                skills: skills.iter().map(|i| SKILL_POOL[*i].to_string()).collect(),
                ..Default::default()
            };
            let tiers = StipendTiers::default();
            let first = serde_json::to_string(&recommend(&user, postings.clone(), &tiers)).unwrap();
            let second = serde_json::to_string(&recommend(&user, postings.clone(), &tiers)).unwrap();
            prop_assert_eq!(first, second);

            let recs = recommend(&user, postings, &tiers);
            for tier in [&recs.best_fit, &recs.growth, &recs.alternative] {
                prop_assert!(tier.len() <= TIER_LIMIT);
                for pair in tier.windows(2) {
                    let key = |s: &ScoredPosting| (s.score, s.matching_skills.len());
                    prop_assert!(key(&pair[0]) >= key(&pair[1]));
                }
            }
        }
    }
}
