//! Career Recommendation Scorer.
//!
//! `score_roles` is the pure ranking step. `recommend_roles` decorates each
//! ranked role with advice and a learning path; advice failures for one role
//! fall back to that role's static advice and never affect the others.

use std::collections::HashSet;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::advice::AdviceProvider;
use crate::analysis::learning::{generate_learning_path, LearningPath};
use crate::registry::{Registry, FALLBACK_DESCRIPTION};

/// How much of one role's required skill set a candidate covers.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMatch {
    pub role: String,
    pub have: Vec<String>,
    pub missing: Vec<String>,
    /// 0 – 100, two decimals
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleRecommendation {
    pub role: String,
    pub role_description: String,
    pub have: Vec<String>,
    pub missing: Vec<String>,
    pub match_score: f64,
    pub advice: String,
    pub learning_path: LearningPath,
}

/// Ranks every career path by coverage of `skills`.
///
/// Roles with no overlap are dropped. Ties keep registry order.
pub fn score_roles(skills: &[String], registry: &Registry) -> Vec<RoleMatch> {
    let owned: HashSet<&str> = skills.iter().map(String::as_str).collect();

    let mut matches: Vec<RoleMatch> = registry
        .career_paths
        .iter()
        .filter_map(|profile| {
            let (have, missing): (Vec<String>, Vec<String>) = profile
                .required_skills
                .iter()
                .cloned()
                .partition(|skill| owned.contains(skill.as_str()));
            if have.is_empty() {
                return None;
            }
            // validated non-empty at startup
            let match_score =
                round2(100.0 * have.len() as f64 / profile.required_skills.len() as f64);
            Some(RoleMatch {
                role: profile.role.clone(),
                have,
                missing,
                match_score,
            })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    debug!(
        "{} of {} career paths overlap with {} skills",
        matches.len(),
        registry.career_paths.len(),
        skills.len()
    );
    matches
}

/// Full recommendation list: ranking plus advice and a learning path per role.
pub async fn recommend_roles(
    skills: &[String],
    registry: &Registry,
    advisor: &dyn AdviceProvider,
) -> Vec<RoleRecommendation> {
    let ranked = score_roles(skills, registry);

    let advice = join_all(
        ranked
            .iter()
            .map(|m| advisor.advise(&m.role, &m.have, &m.missing)),
    )
    .await;

    ranked
        .into_iter()
        .zip(advice)
        .map(|(m, advice)| {
            let advice = advice.unwrap_or_else(|e| {
                warn!("Advice for '{}' failed, using static advice: {e}", m.role);
                registry.advice_for(&m.role).to_string()
            });
            let role_description = registry
                .profile(&m.role)
                .and_then(|p| p.description.clone())
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
            let learning_path = generate_learning_path(&m.missing, registry);

            RoleRecommendation {
                role: m.role,
                role_description,
                have: m.have,
                missing: m.missing,
                match_score: m.match_score,
                advice,
                learning_path,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{AdviceError, StaticAdvisor};
    use crate::registry::{CareerPathProfile, SkillCatalog};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(role: &str, required: &[&str]) -> CareerPathProfile {
        CareerPathProfile {
            role: role.to_string(),
            required_skills: skills(required),
            description: None,
            advice: Some(format!("static advice for {role}")),
        }
    }

    fn registry(paths: Vec<CareerPathProfile>) -> Registry {
        Registry {
            catalog: SkillCatalog::new(skills(&["Python", "SQL", "Rust"])),
            career_paths: paths,
            learning_resources: HashMap::new(),
        }
    }

    /// Fails for one role, succeeds for the rest.
    struct FlakyAdvisor {
        failing_role: &'static str,
    }

    #[async_trait]
    impl AdviceProvider for FlakyAdvisor {
        async fn advise(
            &self,
            role: &str,
            _have: &[String],
            _missing: &[String],
        ) -> Result<String, AdviceError> {
            if role == self.failing_role {
                Err(AdviceError::Timeout(Duration::from_secs(1)))
            } else {
                Ok(format!("generated advice for {role}"))
            }
        }

        fn backend(&self) -> &'static str {
            "flaky"
        }
    }

    #[test]
    fn test_data_scientist_score_is_forty() {
        let ranked = score_roles(&skills(&["Python", "SQL"]), &Registry::builtin());
        let ds = ranked.iter().find(|m| m.role == "Data Scientist").unwrap();
        assert_eq!(ds.have, skills(&["Python", "SQL"]));
        assert_eq!(ds.missing, skills(&["Machine Learning", "Statistics", "Data Analysis"]));
        assert_eq!(ds.match_score, 40.0);
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let registry = registry(vec![profile("Trio", &["Python", "SQL", "Rust"])]);
        let ranked = score_roles(&skills(&["Python"]), &registry);
        assert_eq!(ranked[0].match_score, 33.33);
    }

    #[test]
    fn test_roles_without_overlap_are_dropped() {
        let ranked = score_roles(&skills(&["Python"]), &Registry::builtin());
        let roles: Vec<&str> = ranked.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["Software Engineer", "Data Scientist"]);
        assert!(ranked.iter().all(|m| !m.have.is_empty()));
    }

    #[test]
    fn test_no_skills_gives_no_roles() {
        assert!(score_roles(&[], &Registry::builtin()).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let registry = registry(vec![
            profile("A", &["Python", "Go"]),
            profile("B", &["Python"]),
            profile("C", &["SQL", "Go"]),
            profile("D", &["Rust", "Go", "Zig", "C"]),
        ]);
        let ranked = score_roles(&skills(&["Python", "SQL", "Rust"]), &registry);
        let order: Vec<(&str, f64)> = ranked
            .iter()
            .map(|m| (m.role.as_str(), m.match_score))
            .collect();
        assert_eq!(order, vec![("B", 100.0), ("A", 50.0), ("C", 50.0), ("D", 25.0)]);
    }

    #[test]
    fn test_score_formula_holds_for_every_builtin_role() {
        let registry = Registry::builtin();
        let all: Vec<String> = registry.catalog.iter().cloned().collect();
        for m in score_roles(&all, &registry) {
            let required = registry.profile(&m.role).unwrap().required_skills.len();
            let expected = 100.0 * m.have.len() as f64 / required as f64;
            assert!((m.match_score - expected).abs() <= 0.005, "{}", m.role);
            assert_eq!(m.have.len() + m.missing.len(), required);
        }
    }

    #[tokio::test]
    async fn test_recommendations_carry_static_advice_and_learning_path() {
        let registry = Arc::new(Registry::builtin());
        let advisor = StaticAdvisor::new(registry.clone());
        let recs = recommend_roles(&skills(&["Python", "SQL"]), &registry, &advisor).await;

        let ds = recs.iter().find(|r| r.role == "Data Scientist").unwrap();
        assert_eq!(ds.advice, registry.advice_for("Data Scientist"));
        assert_eq!(
            ds.role_description,
            "Analyzes data to extract insights and build predictive models."
        );
        assert_eq!(ds.learning_path.len(), 3);
        assert!(ds.learning_path.contains_key("Machine Learning"));
        assert_eq!(recs[0].role, "Data Scientist");
    }

    #[tokio::test]
    async fn test_one_failing_role_falls_back_without_aborting_others() {
        let registry = registry(vec![profile("A", &["Python"]), profile("B", &["Python", "SQL"])]);
        let advisor = FlakyAdvisor { failing_role: "A" };
        let recs = recommend_roles(&skills(&["Python"]), &registry, &advisor).await;

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].advice, "static advice for A");
        assert_eq!(recs[1].advice, "generated advice for B");
    }

    #[tokio::test]
    async fn test_missing_description_uses_fallback() {
        let registry = registry(vec![profile("A", &["Python"])]);
        let advisor = StaticAdvisor::new(Arc::new(registry.clone()));
        let recs = recommend_roles(&skills(&["Python"]), &registry, &advisor).await;
        assert_eq!(recs[0].role_description, FALLBACK_DESCRIPTION);
        assert!(recs[0].learning_path.is_empty());
    }
}
