//! Reference data: the skill catalog, career path profiles, and learning
//! resources. Loaded once at startup, validated, then shared read-only.

mod defaults;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const FALLBACK_DESCRIPTION: &str = "No description available.";
pub const FALLBACK_ADVICE: &str = "Keep improving your skills to stay competitive.";
pub const FALLBACK_RESOURCE: &str = "Search online resources.";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Registry file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Skill catalog is empty")]
    EmptyCatalog,

    #[error("Skill '{0}' appears more than once in the catalog")]
    DuplicateSkill(String),

    #[error("Career path with an empty role name")]
    EmptyRoleName,

    #[error("Career path '{0}' is defined more than once")]
    DuplicateRole(String),

    #[error("Career path '{0}' has no required skills")]
    EmptyRequiredSkills(String),
}

/// Canonical skill labels the fuzzy matcher looks for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// A target role and what it takes to get there.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerPathProfile {
    pub role: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advice: Option<String>,
}

/// Everything the scoring engine reads. Immutable after `validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    #[serde(rename = "skills")]
    pub catalog: SkillCatalog,
    /// Definition order is the tie-break order for equal match scores.
    pub career_paths: Vec<CareerPathProfile>,
    #[serde(default)]
    pub learning_resources: HashMap<String, Vec<String>>,
}

impl Registry {
    /// Loads a registry from a JSON file and validates it.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry: Registry = serde_json::from_str(&raw)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Rejects configurations the scorer cannot work with.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.catalog.is_empty() {
            return Err(RegistryError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for skill in self.catalog.iter() {
            if !seen.insert(skill.as_str()) {
                return Err(RegistryError::DuplicateSkill(skill.clone()));
            }
        }

        let mut roles = HashSet::new();
        for profile in &self.career_paths {
            if profile.role.trim().is_empty() {
                return Err(RegistryError::EmptyRoleName);
            }
            if !roles.insert(profile.role.as_str()) {
                return Err(RegistryError::DuplicateRole(profile.role.clone()));
            }
            // match_score divides by this length
            if profile.required_skills.is_empty() {
                return Err(RegistryError::EmptyRequiredSkills(profile.role.clone()));
            }
        }

        Ok(())
    }

    /// Skill labels used by career paths or learning resources that the
    /// catalog does not contain. These can never be matched from text, but
    /// are allowed.
    pub fn uncatalogued_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .career_paths
            .iter()
            .flat_map(|p| p.required_skills.iter())
            .chain(self.learning_resources.keys())
            .filter(|label| !self.catalog.contains(label))
            .cloned()
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }

    pub fn profile(&self, role: &str) -> Option<&CareerPathProfile> {
        self.career_paths.iter().find(|p| p.role == role)
    }

    /// The static advice for a role, or the generic fallback.
    pub fn advice_for(&self, role: &str) -> &str {
        self.profile(role)
            .and_then(|p| p.advice.as_deref())
            .unwrap_or(FALLBACK_ADVICE)
    }

    pub fn resources_for(&self, skill: &str) -> Option<&[String]> {
        self.learning_resources.get(skill).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile(role: &str, skills: &[&str]) -> CareerPathProfile {
        CareerPathProfile {
            role: role.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            description: None,
            advice: None,
        }
    }

    fn registry(paths: Vec<CareerPathProfile>) -> Registry {
        Registry {
            catalog: SkillCatalog::new(vec!["Python".to_string(), "SQL".to_string()]),
            career_paths: paths,
            learning_resources: HashMap::new(),
        }
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = Registry::builtin();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.career_paths.len(), 10);
        assert_eq!(registry.catalog.len(), 23);
    }

    #[test]
    fn test_empty_required_skills_is_rejected() {
        let registry = registry(vec![profile("Ghost", &[])]);
        assert!(matches!(
            registry.validate(),
            Err(RegistryError::EmptyRequiredSkills(role)) if role == "Ghost"
        ));
    }

    #[test]
    fn test_duplicate_role_is_rejected() {
        let registry = registry(vec![profile("Analyst", &["SQL"]), profile("Analyst", &["Python"])]);
        assert!(matches!(registry.validate(), Err(RegistryError::DuplicateRole(_))));
    }

    #[test]
    fn test_duplicate_skill_is_rejected() {
        let mut registry = registry(vec![profile("Analyst", &["SQL"])]);
        registry.catalog = SkillCatalog::new(vec!["SQL".to_string(), "SQL".to_string()]);
        assert!(matches!(registry.validate(), Err(RegistryError::DuplicateSkill(_))));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let mut registry = registry(vec![profile("Analyst", &["SQL"])]);
        registry.catalog = SkillCatalog::default();
        assert!(matches!(registry.validate(), Err(RegistryError::EmptyCatalog)));
    }

    #[test]
    fn test_uncatalogued_labels_are_reported_not_rejected() {
        let registry = registry(vec![profile("Analyst", &["SQL", "Statistics", "Excel"])]);
        assert!(registry.validate().is_ok());
        assert_eq!(registry.uncatalogued_labels(), vec!["Excel", "Statistics"]);
    }

    #[test]
    fn test_advice_falls_back_for_unknown_role() {
        let registry = Registry::builtin();
        assert_eq!(registry.advice_for("Astronaut"), FALLBACK_ADVICE);
        assert!(registry.advice_for("Data Scientist").contains("Kaggle"));
    }

    #[test]
    fn test_from_file_loads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "skills": ["Rust", "Go"],
                "career_paths": [
                    {{"role": "Systems Engineer", "required_skills": ["Rust", "Linux"],
                      "description": "Builds low-level software."}}
                ],
                "learning_resources": {{"Linux": ["Linux Journey"]}}
            }}"#
        )
        .unwrap();

        let registry = Registry::from_file(file.path()).unwrap();
        assert_eq!(registry.catalog.len(), 2);
        assert_eq!(registry.career_paths[0].role, "Systems Engineer");
        assert_eq!(registry.career_paths[0].advice, None);
        assert_eq!(registry.resources_for("Linux").unwrap(), ["Linux Journey"]);
    }

    #[test]
    fn test_from_file_rejects_invalid_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skills": ["Rust"], "career_paths": [{{"role": "Empty", "required_skills": []}}]}}"#
        )
        .unwrap();

        assert!(matches!(
            Registry::from_file(file.path()),
            Err(RegistryError::EmptyRequiredSkills(_))
        ));
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let result = Registry::from_file(Path::new("/nonexistent/registry.json"));
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }
}
