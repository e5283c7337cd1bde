//! Fuzzy skill matcher: which catalog skills appear in a block of free text.

use tracing::debug;

use crate::matching::fuzzy::partial_ratio;
use crate::registry::SkillCatalog;

/// Returns the catalog skills whose case-insensitive partial ratio against
/// `text` is strictly above `threshold`, in catalog order.
///
/// Short labels such as "C++" or "AWS" can score highly against unrelated
/// text; this matcher does not try to correct for that.
pub fn match_skills(text: &str, catalog: &SkillCatalog, threshold: f64) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let haystack = text.to_lowercase();
    let matched: Vec<String> = catalog
        .iter()
        .filter(|skill| partial_ratio(&skill.to_lowercase(), &haystack) > threshold)
        .cloned()
        .collect();

    debug!(
        "Matched {} of {} catalog skills (threshold {threshold})",
        matched.len(),
        catalog.len()
    );
    matched
}
