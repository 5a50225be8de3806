use std::collections::HashSet;

use crate::alert::entity::EnrichedAlert;

use super::similarity::similarity;

/// Greedy single-link deduplicator.
///
/// Scans the batch in input order; each alert not yet marked as a duplicate
/// becomes a cluster representative, and every later unmarked alert scoring
/// at or above the threshold against it is folded into that cluster.
/// Order-dependent: if A~B and B~C but not A~C, membership follows the scan
/// order, and that sensitivity is part of the contract.
///
/// O(n²) similarity evaluations, each quadratic in message length. Batch
/// mode only — callers targeting large or streaming workloads need an
/// indexing strategy in front of this, not a change to these semantics.
#[derive(Debug, Clone)]
pub struct DedupEngine {
    threshold: f64,
}

impl DedupEngine {
    /// `threshold` is the minimum composite similarity at which a later
    /// alert merges into an earlier representative. No default is imposed
    /// here; observed deployments use 0.7–0.75.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reduce a batch to its cluster representatives, preserving the
    /// relative input order of the survivors. Batches of length ≤ 1 are
    /// returned unchanged.
    pub fn deduplicate(&self, batch: Vec<EnrichedAlert>) -> Vec<EnrichedAlert> {
        if batch.len() <= 1 {
            return batch;
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(batch.len());
        let mut keep = vec![false; batch.len()];

        for i in 0..batch.len() {
            if seen.contains(&batch[i].id) {
                continue;
            }
            keep[i] = true;
            seen.insert(batch[i].id.clone());

            // Mark later near-duplicates of this representative.
            for j in (i + 1)..batch.len() {
                if !seen.contains(&batch[j].id)
                    && similarity(&batch[i], &batch[j]) >= self.threshold
                {
                    seen.insert(batch[j].id.clone());
                }
            }
        }

        batch
            .into_iter()
            .zip(keep)
            .filter_map(|(alert, kept)| kept.then_some(alert))
            .collect()
    }
}
