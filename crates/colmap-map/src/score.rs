//! Similarity scoring between a target field name and a source column name.
//!
//! Rules are applied in order and the first one that fires decides the
//! score:
//!
//! 1. either normalized name is empty: `0.0`
//! 2. normalized names are equal: `1.0`
//! 3. one normalized name contains the other: [`SUBSTRING_SCORE`]
//! 4. otherwise `1 - levenshtein / max_len` over the normalized names
//!
//! The edit distance never exceeds the longer length, so scores stay within
//! `0.0..=1.0`.

use std::cmp::Ordering;

use colmap_model::SourceColumn;
use rapidfuzz::distance::levenshtein;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;

/// Minimum score for a fuzzy match to be proposed. Inclusive.
pub const ACCEPT_THRESHOLD: f64 = 0.7;

/// Score given when one normalized name contains the other.
pub const SUBSTRING_SCORE: f64 = 0.85;

/// Symmetric similarity of two raw names, at most `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let na = normalize_name(a);
    let nb = normalize_name(b);
    similarity_normalized(&na, &nb)
}

pub(crate) fn similarity_normalized(na: &str, nb: &str) -> f64 {
    if na.is_empty() || nb.is_empty() {
        return 0.0;
    }
    if na == nb {
        return 1.0;
    }
    if na.contains(nb) || nb.contains(na) {
        return SUBSTRING_SCORE;
    }
    // Normalized names are ASCII, so byte length equals char count.
    let max_len = na.len().max(nb.len());
    let distance = levenshtein::distance(na.chars(), nb.chars());
    1.0 - distance as f64 / max_len as f64
}

/// A source column scored against one target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub source_column: String,
    pub score: f64,
}

impl Candidate {
    pub fn is_acceptable(&self) -> bool {
        self.score >= ACCEPT_THRESHOLD
    }
}

/// Score every source column against `target` for manual-override hints.
///
/// Returns all columns sorted by score, highest first. Equal scores keep
/// source order.
pub fn rank_candidates(target: &str, sources: &[SourceColumn]) -> Vec<Candidate> {
    let normalized_target = normalize_name(target);
    let mut candidates: Vec<Candidate> = sources
        .iter()
        .map(|column| Candidate {
            source_column: column.name.clone(),
            score: similarity_normalized(&normalized_target, &normalize_name(&column.name)),
        })
        .collect();

    // sort_by is stable, so ties stay in source order
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}
