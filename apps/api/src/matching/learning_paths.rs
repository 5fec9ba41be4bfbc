//! Learning-path suggestions for profiles that earned no best-fit or growth matches.

use serde::Serialize;

use crate::matching::normalize::{canonical_opt, canonical_skills};
use crate::models::profile::UserProfile;

const MAX_PATHS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: &'static str,
    pub skills: &'static [&'static str],
    pub resources: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
enum Track {
    Technology,
    Business,
    Finance,
    Design,
    General,
}

impl Track {
    fn applies(self, sector: &str, education: &str) -> bool {
        match self {
            Track::Technology => sector == "technology" || education.contains("tech"),
            Track::Business => sector == "marketing" || sector == "business",
            Track::Finance => sector == "finance",
            Track::Design => sector == "design",
            Track::General => true,
        }
    }
}

/// (track, canonical skill that makes the path redundant, path)
const CATALOG: &[(Track, &str, LearningPath)] = &[
    (
        Track::Technology,
        "python",
        LearningPath {
            title: "Python Programming Fundamentals",
            description: "Pick up Python basics, the entry ticket for most tech internships",
            duration: "4-6 weeks",
            difficulty: "Beginner",
            skills: &["Python", "Programming Logic", "Data Structures"],
            resources: &["Python.org tutorial", "Codecademy Python", "freeCodeCamp Python"],
        },
    ),
    (
        Track::Technology,
        "javascript",
        LearningPath {
            title: "JavaScript & Web Development",
            description: "Build frontend and backend features with JavaScript",
            duration: "6-8 weeks",
            difficulty: "Intermediate",
            skills: &["JavaScript", "HTML", "CSS", "React"],
            resources: &["MDN Web Docs", "JavaScript.info", "React documentation"],
        },
    ),
    (
        Track::Technology,
        "sql",
        LearningPath {
            title: "SQL & Database Management",
            description: "Query and model data for analysis and backend work",
            duration: "3-4 weeks",
            difficulty: "Beginner",
            skills: &["SQL", "Database Design", "Data Analysis"],
            resources: &["W3Schools SQL", "SQLBolt", "Khan Academy SQL"],
        },
    ),
    (
        Track::Business,
        "digital marketing",
        LearningPath {
            title: "Digital Marketing Fundamentals",
            description: "Learn the channels, strategy and tools of digital marketing",
            duration: "4-5 weeks",
            difficulty: "Beginner",
            skills: &["Digital Marketing", "SEO", "Social Media Marketing"],
            resources: &[
                "Google Digital Marketing Course",
                "HubSpot Academy",
                "Coursera Digital Marketing",
            ],
        },
    ),
    (
        Track::Business,
        "excel",
        LearningPath {
            title: "Excel & Data Analysis",
            description: "Use Excel for business analysis and reporting",
            duration: "3-4 weeks",
            difficulty: "Beginner",
            skills: &["Excel", "Data Analysis", "Pivot Tables"],
            resources: &["Microsoft Excel Help", "ExcelJet", "Chandoo.org"],
        },
    ),
    (
        Track::Finance,
        "financial analysis",
        LearningPath {
            title: "Financial Analysis & Modeling",
            description: "Analyse statements and build financial models in Excel",
            duration: "5-6 weeks",
            difficulty: "Intermediate",
            skills: &["Financial Analysis", "Excel", "Financial Modeling"],
            resources: &["CFI Financial Modeling", "Wall Street Prep", "Investopedia"],
        },
    ),
    (
        Track::Design,
        "figma",
        LearningPath {
            title: "UI/UX Design with Figma",
            description: "Learn design principles and prototype interfaces in Figma",
            duration: "4-5 weeks",
            difficulty: "Beginner",
            skills: &["Figma", "UI Design", "UX Research"],
            resources: &["Figma Academy", "Design+Code", "UX Mastery"],
        },
    ),
    (
        Track::General,
        "project management",
        LearningPath {
            title: "Project Management Fundamentals",
            description: "Plan, track and deliver work with agile practices",
            duration: "3-4 weeks",
            difficulty: "Beginner",
            skills: &["Project Management", "Agile", "Team Collaboration"],
            resources: &["PMI Learning", "Coursera Project Management", "Asana Academy"],
        },
    ),
];

/// Up to three paths, in catalog order, for tracks that fit the profile and
/// skills it does not list yet.
pub fn suggest_learning_paths(profile: &UserProfile) -> Vec<LearningPath> {
    let sector = canonical_opt(profile.sector.as_deref());
    let education = canonical_opt(profile.education.as_deref());
    let skills = canonical_skills(&profile.skills);

    CATALOG
        .iter()
        .filter(|(track, _, _)| track.applies(&sector, &education))
        .filter(|(_, skill, _)| !skills.iter().any(|s| s == skill))
        .take(MAX_PATHS)
        .map(|(_, _, path)| path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(paths: &[LearningPath]) -> Vec<&'static str> {
        paths.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_empty_profile_gets_general_path_only() {
        let paths = suggest_learning_paths(&UserProfile::default());
        assert_eq!(titles(&paths), vec!["Project Management Fundamentals"]);
    }

    #[test]
    fn test_tech_education_triggers_tech_track() {
        let profile = UserProfile {
            education: Some("B.Tech".to_string()),
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let paths = suggest_learning_paths(&profile);
        assert_eq!(
            titles(&paths),
            vec![
                "JavaScript & Web Development",
                "SQL & Database Management",
                "Project Management Fundamentals",
            ]
        );
    }

    #[test]
    fn test_capped_at_three() {
        let profile = UserProfile {
            sector: Some("Technology".to_string()),
            ..Default::default()
        };
        assert_eq!(suggest_learning_paths(&profile).len(), 3);
    }

    #[test]
    fn test_known_skills_are_skipped() {
        let profile = UserProfile {
            sector: Some("design".to_string()),
            skills: vec!["figma".to_string(), "Project Management".to_string()],
            ..Default::default()
        };
        assert!(suggest_learning_paths(&profile).is_empty());
    }
}
