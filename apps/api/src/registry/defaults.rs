// Built-in reference data used when no REGISTRY_PATH is configured.

use std::collections::HashMap;

use super::{CareerPathProfile, Registry, SkillCatalog};

const SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "SQL",
    "React",
    "Machine Learning",
    "Data Analysis",
    "AWS",
    "Azure",
    "Cloud Computing",
    "Cybersecurity",
    "Project Management",
    "Leadership",
    "Marketing",
    "Financial Modelling",
    "Accounting",
    "Medical Knowledge",
    "Patient Care",
    "Graphic Design",
    "UI Design",
    "Creativity",
    "Teaching",
    "Entrepreneurship",
];

/// (role, required skills, description, advice)
const CAREER_PATHS: &[(&str, &[&str], &str, &str)] = &[
    (
        "Software Engineer",
        &["Python", "Java", "C++", "Problem Solving", "Data Structures"],
        "Designs, develops, and maintains software applications.",
        "Practice coding on LeetCode, build projects, and contribute to GitHub.",
    ),
    (
        "Data Scientist",
        &["Python", "Machine Learning", "Statistics", "SQL", "Data Analysis"],
        "Analyzes data to extract insights and build predictive models.",
        "Work on Kaggle datasets, learn ML libraries, and publish notebooks.",
    ),
    (
        "Cloud Engineer",
        &["AWS", "Azure", "Linux", "Networking"],
        "Manages and deploys applications on cloud platforms.",
        "Get AWS/Azure certifications, deploy apps on cloud.",
    ),
    (
        "Cybersecurity Specialist",
        &["Cybersecurity", "Linux", "Ethical Hacking", "Cryptography"],
        "Protects systems and networks from cyber threats.",
        "Learn penetration testing, earn CEH certification.",
    ),
    (
        "Product Manager",
        &["Agile", "Market Research", "Leadership"],
        "Defines product vision, strategy, and ensures delivery.",
        "Master agile methods, talk to users, and improve leadership.",
    ),
    (
        "Financial Analyst",
        &["Excel", "Accounting", "Financial Modelling"],
        "Analyzes financial data to support decision-making.",
        "Learn Excel, valuation modeling, and stay updated with market news.",
    ),
    (
        "Nurse",
        &["Medical Knowledge", "Patient Care", "Communication"],
        "Provides patient care and medical support in healthcare settings.",
        "Gain hospital experience and pursue nursing certifications.",
    ),
    (
        "Graphic Designer",
        &["Adobe Photoshop", "Creativity", "UI Design"],
        "Creates visual concepts for branding and communication.",
        "Build a portfolio and master Adobe tools.",
    ),
    (
        "Teacher",
        &["Subject Knowledge", "Communication", "Creativity"],
        "Educates students and creates engaging learning experiences.",
        "Use modern pedagogy methods and keep students engaged.",
    ),
    (
        "Entrepreneur",
        &["Business Strategy", "Networking", "Leadership"],
        "Builds and manages new business ventures.",
        "Learn business strategy, take risks, and grow leadership.",
    ),
];

// Keys are not all catalog skills ("Cloud", "Finance"); kept as-is.
const LEARNING_RESOURCES: &[(&str, &[&str])] = &[
    ("Python", &["FreeCodeCamp Python", "Automate the Boring Stuff"]),
    ("Machine Learning", &["Andrew Ng ML Course", "Kaggle Projects"]),
    ("Cloud", &["AWS Cloud Practitioner", "Deploy app on AWS"]),
    ("Finance", &["CFA Level 1", "Financial Modeling Prep"]),
    ("Marketing", &["Google Digital Garage", "SEO projects"]),
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SkillCatalog {
    pub fn builtin() -> Self {
        SkillCatalog::new(owned(SKILLS))
    }
}

impl Registry {
    pub fn builtin() -> Self {
        let career_paths = CAREER_PATHS
            .iter()
            .map(|(role, skills, description, advice)| CareerPathProfile {
                role: role.to_string(),
                required_skills: owned(skills),
                description: Some(description.to_string()),
                advice: Some(advice.to_string()),
            })
            .collect();

        let learning_resources: HashMap<String, Vec<String>> = LEARNING_RESOURCES
            .iter()
            .map(|(skill, resources)| (skill.to_string(), owned(resources)))
            .collect();

        Registry {
            catalog: SkillCatalog::builtin(),
            career_paths,
            learning_resources,
        }
    }
}
