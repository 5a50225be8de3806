use crate::alert::entity::EnrichedAlert;

use super::entity::BatchStats;

/// Confidence above which an alert counts as high-confidence.
const HIGH_CONFIDENCE_CUTOFF: f64 = 0.7;

/// Summarize a batch in a single pass.
pub fn aggregate(alerts: &[EnrichedAlert]) -> BatchStats {
    let mut stats = BatchStats {
        total: alerts.len(),
        ..BatchStats::default()
    };

    let mut confidence_sum = 0.0;
    for alert in alerts {
        confidence_sum += alert.confidence_score;
        *stats
            .threat_distribution
            .entry(alert.threat_category)
            .or_insert(0) += 1;
        if alert.confidence_score > HIGH_CONFIDENCE_CUTOFF {
            stats.high_confidence_count += 1;
        }
    }

    if !alerts.is_empty() {
        stats.average_confidence = confidence_sum / alerts.len() as f64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::entity::RawAlert;
    use crate::common::entity::ThreatCategory;

    fn make_batch(messages: &[&str]) -> Vec<EnrichedAlert> {
        messages
            .iter()
            .enumerate()
            .map(|(i, m)| EnrichedAlert::from_raw(RawAlert::new(*m), i, "test"))
            .collect()
    }

    #[test]
    fn empty_batch_yields_zeroed_stats() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_confidence, 0.0);
        assert!(stats.threat_distribution.is_empty());
        assert_eq!(stats.high_confidence_count, 0);
    }

    #[test]
    fn counts_categories_and_totals() {
        let batch = make_batch(&[
            "malware found",
            "virus outbreak",
            "failed login attempt",
            "normal status update",
        ]);

        let stats = aggregate(&batch);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.threat_distribution[&ThreatCategory::Malware], 2);
        assert_eq!(stats.threat_distribution[&ThreatCategory::Authentication], 1);
        assert_eq!(stats.threat_distribution[&ThreatCategory::Other], 1);
        assert_eq!(stats.threat_distribution.len(), 3);
    }

    #[test]
    fn averages_confidence() {
        // "normal status update" scores 0.5; "critical malware outbreak"
        // scores 0.75 (malware +0.10, critical +0.15).
        let batch = make_batch(&["normal status update", "critical malware outbreak"]);

        let stats = aggregate(&batch);
        assert!((stats.average_confidence - 0.625).abs() < 1e-9);
    }

    #[test]
    fn high_confidence_is_strictly_above_cutoff() {
        // 0.5 and 0.6 fall at or below the cutoff; 0.75 is counted.
        let batch = make_batch(&[
            "normal status update",
            "malware spotted",
            "critical malware outbreak",
        ]);

        let stats = aggregate(&batch);
        assert_eq!(stats.high_confidence_count, 1);
    }
}
