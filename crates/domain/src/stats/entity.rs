use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::entity::ThreatCategory;

/// Summary of a batch of enriched alerts. Derived on demand from its input;
/// never cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total: usize,
    /// Mean confidence over the batch; 0 for an empty batch.
    pub average_confidence: f64,
    /// Per-category alert counts; categories with no alerts are absent.
    pub threat_distribution: BTreeMap<ThreatCategory, usize>,
    /// Alerts with confidence strictly above the high-confidence cutoff.
    pub high_confidence_count: usize,
}
