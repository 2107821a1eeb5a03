//! Default assignment of source columns to target fields.

use colmap_model::{Assignment, SourceColumn, TargetField};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::normalize::normalize_name;
use crate::score::{ACCEPT_THRESHOLD, similarity_normalized};

/// How a suggestion was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Normalized names are identical.
    Exact,
    /// Best similarity at or above [`ACCEPT_THRESHOLD`].
    Similar,
}

/// A proposed source column for one target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub target_field: String,
    pub source_column: String,
    pub score: f64,
    pub kind: MatchKind,
}

/// Propose a source column for as many target fields as possible.
///
/// Two passes over `targets`, each in template order:
///
/// 1. exact: the first unused source whose normalized name equals the
///    target's normalized name
/// 2. similar: the unused source with the highest [`similarity`](crate::similarity),
///    accepted when it reaches [`ACCEPT_THRESHOLD`]; ties go to the
///    earliest source
///
/// A source column is used at most once across both passes. Targets without
/// a match are left out. Results come back in template order.
pub fn suggest(targets: &[TargetField], sources: &[SourceColumn]) -> Vec<Suggestion> {
    let normalized_sources: Vec<String> =
        sources.iter().map(|s| normalize_name(&s.name)).collect();
    let normalized_targets: Vec<String> =
        targets.iter().map(|t| normalize_name(&t.name)).collect();
    let mut used = vec![false; sources.len()];
    let mut picked: Vec<Option<Suggestion>> = vec![None; targets.len()];

    for (t_idx, target) in targets.iter().enumerate() {
        let wanted = &normalized_targets[t_idx];
        let hit = normalized_sources
            .iter()
            .enumerate()
            .find(|(s_idx, normalized)| !used[*s_idx] && *normalized == wanted);
        if let Some((s_idx, _)) = hit {
            used[s_idx] = true;
            debug!(
                target = %target.name,
                source = %sources[s_idx].name,
                "exact match"
            );
            picked[t_idx] = Some(Suggestion {
                target_field: target.name.clone(),
                source_column: sources[s_idx].name.clone(),
                score: 1.0,
                kind: MatchKind::Exact,
            });
        }
    }
    let exact_count = picked.iter().flatten().count();

    for (t_idx, target) in targets.iter().enumerate() {
        if picked[t_idx].is_some() {
            continue;
        }
        let mut best: Option<(usize, f64)> = None;
        for (s_idx, normalized) in normalized_sources.iter().enumerate() {
            if used[s_idx] {
                continue;
            }
            let score = similarity_normalized(&normalized_targets[t_idx], normalized);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((s_idx, score));
            }
        }
        match best {
            Some((s_idx, score)) if score >= ACCEPT_THRESHOLD => {
                used[s_idx] = true;
                debug!(
                    target = %target.name,
                    source = %sources[s_idx].name,
                    score,
                    "similar match"
                );
                picked[t_idx] = Some(Suggestion {
                    target_field: target.name.clone(),
                    source_column: sources[s_idx].name.clone(),
                    score,
                    kind: MatchKind::Similar,
                });
            }
            _ => debug!(target = %target.name, "no match above threshold"),
        }
    }

    let suggestions: Vec<Suggestion> = picked.into_iter().flatten().collect();
    info!(
        targets = targets.len(),
        sources = sources.len(),
        exact = exact_count,
        similar = suggestions.len() - exact_count,
        "default mapping computed"
    );
    suggestions
}

/// [`suggest`] reduced to a plain target-to-source [`Assignment`].
pub fn suggest_defaults(targets: &[TargetField], sources: &[SourceColumn]) -> Assignment {
    suggest(targets, sources)
        .into_iter()
        .map(|s| (s.target_field, s.source_column))
        .collect()
}
