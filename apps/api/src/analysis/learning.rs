use std::collections::BTreeMap;

use crate::registry::{Registry, FALLBACK_RESOURCE};

/// Missing skill → ordered resource names.
pub type LearningPath = BTreeMap<String, Vec<String>>;

/// Builds a roadmap for the given missing skills. Skills without registered
/// resources get the generic fallback entry. Never fails.
pub fn generate_learning_path(missing: &[String], registry: &Registry) -> LearningPath {
    missing
        .iter()
        .map(|skill| {
            let resources = registry
                .resources_for(skill)
                .map(<[String]>::to_vec)
                .unwrap_or_else(|| vec![FALLBACK_RESOURCE.to_string()]);
            (skill.clone(), resources)
        })
        .collect()
}
