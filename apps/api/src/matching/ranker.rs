//! Ranker — drops non-matches and orders the survivors deterministically.

use serde::Serialize;

use crate::matching::categorizer::Category;
use crate::models::posting::Posting;

/// A posting enriched with everything the engine derived for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub score: u32,
    pub reasons: Vec<String>,
    pub narratives: Vec<String>,
    pub category: Category,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub related_skills: Vec<String>,
}

/// Drops zero-score and no-match entries, then orders survivors by score
/// and matching-skill count, both descending. The sort is stable, so exact
/// ties keep their input order.
pub fn rank(scored: Vec<ScoredPosting>) -> Vec<ScoredPosting> {
    let mut survivors: Vec<ScoredPosting> = scored
        .into_iter()
        .filter(|s| s.score > 0 && s.category != Category::NoMatch)
        .collect();

    survivors.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.matching_skills.len().cmp(&a.matching_skills.len()))
    });

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(title: &str, score: u32, matches: usize, category: Category) -> ScoredPosting {
        let mut posting = Posting::default();
        posting
            .details
            .insert("title".to_string(), serde_json::json!(title));
        ScoredPosting {
            posting,
            score,
            reasons: vec![],
            narratives: vec![],
            category,
            matching_skills: (0..matches).map(|i| format!("s{i}")).collect(),
            missing_skills: vec![],
            related_skills: vec![],
        }
    }

    fn titles(ranked: &[ScoredPosting]) -> Vec<&str> {
        ranked
            .iter()
            .map(|s| s.posting.detail_str("title").unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_drops_zero_and_no_match() {
        let ranked = rank(vec![
            scored("zero", 0, 0, Category::Alternative),
            scored("rejected", 3, 0, Category::NoMatch),
            scored("kept", 1, 0, Category::Alternative),
        ]);
        assert_eq!(titles(&ranked), vec!["kept"]);
    }

    #[test]
    fn test_orders_by_score_then_matches() {
        let ranked = rank(vec![
            scored("a", 4, 1, Category::BestFit),
            scored("b", 6, 1, Category::BestFit),
            scored("c", 4, 2, Category::Growth),
        ]);
        assert_eq!(titles(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_exact_ties_keep_input_order() {
        let ranked = rank(vec![
            scored("first", 5, 2, Category::BestFit),
            scored("second", 5, 2, Category::Growth),
            scored("third", 5, 2, Category::BestFit),
        ]);
        assert_eq!(titles(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_wire_format_flattens_posting() {
        let value = serde_json::to_value(scored("x", 3, 1, Category::BestFit)).unwrap();
        assert_eq!(value["title"], "x");
        assert_eq!(value["category"], "best_fit");
        assert_eq!(value["matchingSkills"], serde_json::json!(["s0"]));
        assert!(value.get("posting").is_none());
    }

    #[test]
    fn test_catalog_engine_keys_not_duplicated() {
        let posting: Posting = serde_json::from_value(serde_json::json!({
            "title": "x",
            "score": "ten",
            "reasons": ["from the catalog"]
        }))
        .unwrap();
        let entry = ScoredPosting {
            posting,
            ..scored("x", 3, 1, Category::BestFit)
        };

        let text = serde_json::to_string(&entry).unwrap();
        assert_eq!(text.matches("\"score\"").count(), 1);
        assert_eq!(text.matches("\"reasons\"").count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["score"], 3);
        assert_eq!(value["title"], "x");
    }
}
