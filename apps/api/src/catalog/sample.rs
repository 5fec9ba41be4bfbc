//! Bundled sample catalog, used for local runs without a database and for seeding.

use serde_json::json;

use crate::models::posting::Posting;

pub fn sample_postings() -> Vec<Posting> {
    let documents = json!([
        {
            "title": "Software Development Intern",
            "company": "TechCorp",
            "education": "B.Tech",
            "department": "CSE",
            "sector": "Technology",
            "location": "Bangalore",
            "skills": ["Python", "JavaScript", "React", "Node.js"],
            "duration": "6 months",
            "stipend": "25000"
        },
        {
            "title": "Data Science Intern",
            "company": "DataViz Inc",
            "education": "B.Tech",
            "department": "CSE",
            "sector": "Technology",
            "location": "Mumbai",
            "skills": ["Python", "Machine Learning", "Pandas", "NumPy"],
            "duration": "3 months",
            "stipend": "30000"
        },
        {
            "title": "Marketing Intern",
            "company": "BrandCo",
            "education": "BBA",
            "department": "Management",
            "sector": "Marketing",
            "location": "Delhi",
            "skills": ["Digital Marketing", "Social Media", "Analytics"],
            "duration": "4 months",
            "stipend": "15000"
        },
        {
            "title": "Finance Intern",
            "company": "FinanceFirst",
            "education": "B.Com",
            "department": "Commerce",
            "sector": "Finance",
            "location": "Chennai",
            "skills": ["Excel", "Financial Analysis", "Accounting"],
            "duration": "6 months",
            "stipend": "20000"
        },
        {
            "title": "Web Development Intern",
            "company": "WebSolutions",
            "education": "B.Tech",
            "department": "IT",
            "sector": "Technology",
            "location": "Bangalore",
            "skills": ["HTML", "CSS", "JavaScript", "React", "Python"],
            "duration": "5 months",
            "stipend": "22000"
        },
        {
            "title": "UI/UX Design Intern",
            "company": "DesignStudio",
            "education": "B.Tech",
            "department": "CSE",
            "sector": "Design",
            "location": "Pune",
            "skills": ["Figma", "Adobe XD", "User Research", "Prototyping"],
            "duration": "4 months",
            "stipend": "18000"
        },
        {
            "title": "Business Analyst Intern",
            "company": "BusinessTech",
            "education": "MBA",
            "department": "Management",
            "sector": "Consulting",
            "location": "Hyderabad",
            "skills": ["SQL", "Excel", "Power BI", "Business Analysis"],
            "duration": "6 months",
            "stipend": "35000"
        },
        {
            "title": "Mobile App Development Intern",
            "company": "MobileFirst",
            "education": "B.Tech",
            "department": "CSE",
            "sector": "Technology",
            "location": "Bangalore",
            "skills": ["React Native", "Flutter", "JavaScript", "Firebase"],
            "duration": "6 months",
            "stipend": "28000"
        }
    ]);

    // Posting fields are all lenient; a document array always deserializes.
    serde_json::from_value(documents).unwrap_or_default()
}
