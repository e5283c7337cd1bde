//! ATS keyword scorer — lexical overlap between a resume and a job description.
//!
//! Keywords are the job description's whitespace tokens longer than three
//! characters, lowercased. There is no stopword list: "with" and "team" count.
//! `matched_keywords` keeps duplicates while the denominator counts unique
//! keywords, so a keyword repeated in the job text weighs more than once and
//! the score can exceed 100.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::matching::KeywordPolicy;

const MIN_KEYWORD_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsResult {
    /// `None` when the job description has no keywords to score against.
    pub ats_score: Option<f64>,
    pub matched_keywords: Vec<String>,
    pub unique_keywords: usize,
}

/// Lowercased job-description tokens long enough to count as keywords, in
/// order, duplicates included.
pub fn extract_keywords(job_text: &str) -> Vec<String> {
    job_text
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

pub fn score_ats(resume_text: &str, job_text: &str, policy: KeywordPolicy) -> AtsResult {
    let resume = resume_text.to_lowercase();
    let keywords = extract_keywords(job_text);
    let unique_keywords = keywords.iter().collect::<HashSet<_>>().len();

    let matched_keywords: Vec<String> = keywords
        .into_iter()
        .filter(|keyword| policy.occurs(keyword, &resume))
        .collect();

    let ats_score = (unique_keywords > 0).then(|| {
        let raw = 100.0 * matched_keywords.len() as f64 / unique_keywords as f64;
        (raw * 100.0).round() / 100.0
    });

    debug!(
        "ATS: {} matched of {unique_keywords} unique keywords ({policy} policy)",
        matched_keywords.len()
    );

    AtsResult {
        ats_score,
        matched_keywords,
        unique_keywords,
    }
}
