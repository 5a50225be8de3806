use std::collections::BTreeSet;

use crate::alert::entity::EnrichedAlert;

/// Flat bonus when two alerts share a threat category.
const CATEGORY_MATCH_WEIGHT: f64 = 0.3;

/// Maximum contribution of keyword-set overlap.
const KEYWORD_OVERLAP_WEIGHT: f64 = 0.2;

/// Single-character insert/delete/substitute edit distance with unit costs,
/// computed over `char`s with a rolling pair of DP rows.
///
/// Symmetric, zero for identical strings, never larger than the longer
/// string's length. O(len(a)·len(b)) — fine for alert-length messages, but
/// callers doing pairwise comparison should bound batch size.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr: Vec<usize> = vec![0; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let substitution = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Composite similarity between two enriched alerts.
///
/// Additive terms:
/// 1. Levenshtein ratio of the normalized messages, in [0, 1]
///    (0 when both are empty);
/// 2. +0.3 when the threat categories match;
/// 3. keyword Jaccard overlap scaled to [0, 0.2] (0 when both sets are
///    empty).
///
/// The sum is intentionally not clamped: an exact duplicate scores about
/// 1.5. Thresholds in practice sit at 0.7–0.75.
pub fn similarity(a: &EnrichedAlert, b: &EnrichedAlert) -> f64 {
    let message_term = message_similarity(&a.normalized_message, &b.normalized_message);

    let category_term = if a.threat_category == b.threat_category {
        CATEGORY_MATCH_WEIGHT
    } else {
        0.0
    };

    let keyword_term = jaccard(&a.keywords, &b.keywords) * KEYWORD_OVERLAP_WEIGHT;

    message_term + category_term + keyword_term
}

/// Levenshtein ratio: 1.0 for identical strings, down to 0.0 when every
/// position differs.
fn message_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Jaccard index of two keyword sets; 0 when both are empty.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
