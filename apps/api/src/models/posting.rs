use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient;

/// Keys the engine writes next to a posting's own fields in a scored result.
pub const ENGINE_KEYS: &[&str] = &[
    "score",
    "reasons",
    "narratives",
    "category",
    "matchingSkills",
    "missingSkills",
    "relatedSkills",
];

/// One internship in the catalog.
///
/// The engine reads the matching attributes; everything else the document
/// carries (title, company, duration, ids) rides along in `details` and is
/// re-emitted untouched, minus any [`ENGINE_KEYS`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PostingDocument")]
pub struct Posting {
    pub education: Option<String>,
    pub department: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub stipend: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Posting {
    /// Looks up a pass-through string field such as `title`.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

/// Catalog document as read off the wire, before engine keys are dropped.
#[derive(Deserialize)]
struct PostingDocument {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    education: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    department: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    sector: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::stipend")]
    stipend: u64,
    #[serde(flatten)]
    details: Map<String, Value>,
}

impl From<PostingDocument> for Posting {
    fn from(doc: PostingDocument) -> Self {
        let mut details = doc.details;
        details.retain(|key, _| !ENGINE_KEYS.contains(&key.as_str()));

        Posting {
            education: doc.education,
            department: doc.department,
            sector: doc.sector,
            location: doc.location,
            skills: doc.skills,
            stipend: doc.stipend,
            details,
        }
    }
}
