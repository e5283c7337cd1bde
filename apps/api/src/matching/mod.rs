//! Text matching primitives shared by the skill matcher and the ATS scorer.
//!
//! Both consumers go through named policies here, so a stricter policy can be
//! swapped in through configuration without touching the scoring code.

pub mod fuzzy;
pub mod skills;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a keyword is judged to "occur" in a body of text.
///
/// Callers lowercase both sides first; the policy itself is case-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordPolicy {
    /// Plain substring containment. "art" occurs in "startup".
    #[default]
    Substring,
    /// The keyword must be bounded by non-alphanumeric characters or text ends.
    TokenBoundary,
}

impl KeywordPolicy {
    pub fn occurs(&self, needle: &str, haystack: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            KeywordPolicy::Substring => haystack.contains(needle),
            // Every start offset is tried, so overlapping occurrences count.
            KeywordPolicy::TokenBoundary => haystack.char_indices().any(|(start, _)| {
                if !haystack[start..].starts_with(needle) {
                    return false;
                }
                let end = start + needle.len();
                let before_ok = haystack[..start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !c.is_alphanumeric());
                let after_ok = haystack[end..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphanumeric());
                before_ok && after_ok
            }),
        }
    }
}

impl fmt::Display for KeywordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordPolicy::Substring => write!(f, "substring"),
            KeywordPolicy::TokenBoundary => write!(f, "token"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown keyword policy '{0}' (expected 'substring' or 'token')")]
pub struct UnknownPolicy(String);

impl FromStr for KeywordPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(KeywordPolicy::Substring),
            "token" | "token_boundary" => Ok(KeywordPolicy::TokenBoundary),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
