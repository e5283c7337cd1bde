//! Approximate string similarity on a 0–100 scale.
//!
//! The base metric is the normalized indel similarity: `2 * LCS / (len_a + len_b)`.
//! `partial_ratio` aligns the shorter string against every window of the
//! longer one and keeps the best similarity. Both work on chars, not bytes, and
//! are case-sensitive.

use std::collections::HashSet;

/// Best similarity between the shorter string and any same-length window of
/// the longer one, 0–100. Windows hanging off either end of the longer string
/// are included. Returns 0 when either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (needle, haystack) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if contains_window(&haystack, &needle) {
        return 100.0;
    }

    let m = needle.len();
    let n = haystack.len();
    let needle_chars: HashSet<char> = needle.iter().copied().collect();
    let mut best = 0.0_f64;

    // A window whose outer char is absent from the needle never beats its
    // neighbour that drops that char, so those windows are skipped.

    // Leading partial windows: haystack[0..end] for end < m.
    for end in 1..m.min(n + 1) {
        if !needle_chars.contains(&haystack[end - 1]) {
            continue;
        }
        best = best.max(ratio_chars(&needle, &haystack[..end]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Full-length windows.
    for start in 0..=(n - m) {
        if !needle_chars.contains(&haystack[start + m - 1]) {
            continue;
        }
        best = best.max(ratio_chars(&needle, &haystack[start..start + m]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    // Trailing partial windows: haystack[start..n] shorter than m.
    for start in (n - m + 1)..n {
        if !needle_chars.contains(&haystack[start]) {
            continue;
        }
        best = best.max(ratio_chars(&needle, &haystack[start..]));
    }

    best
}

/// Normalized indel similarity, 0–100. Two empty inputs are identical.
fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

/// Longest common subsequence length, single rolling row.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}

fn contains_window(haystack: &[char], needle: &[char]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
