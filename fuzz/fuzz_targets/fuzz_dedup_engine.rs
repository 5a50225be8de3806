#![no_main]

use libfuzzer_sys::fuzz_target;

use domain::alert::entity::{EnrichedAlert, RawAlert};
use domain::alert::normalize::normalize;
use domain::dedup::engine::DedupEngine;
use domain::dedup::similarity::{edit_distance, similarity};
use domain::stats::engine::aggregate;

// Fuzz the enrichment + dedup path end to end.
//
// Layout:
//   [0]    = threshold (0–255, scaled to 0.0–1.5)
//   rest   = split on 0xFF into alert messages (lossy UTF-8), max 32
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let threshold = f64::from(data[0]) / 255.0 * 1.5;

    let batch: Vec<EnrichedAlert> = data[1..]
        .split(|&b| b == 0xFF)
        .filter(|chunk| !chunk.is_empty())
        .take(32)
        .enumerate()
        .map(|(i, chunk)| {
            let message = String::from_utf8_lossy(chunk).into_owned();

            // Normalization is idempotent over arbitrary input
            let once = normalize(&message);
            assert_eq!(normalize(&once), once);
            assert_eq!(edit_distance(&once, &once), 0);

            EnrichedAlert::from_raw(RawAlert::new(message), i, "fuzz")
        })
        .collect();

    for alert in &batch {
        assert!((0.5..=1.0).contains(&alert.confidence_score));

        // Self-similarity: 1.0 message term + 0.3 category bonus, unless
        // the message normalizes to empty (message term defined as 0).
        let self_score = similarity(alert, alert);
        if alert.normalized_message.is_empty() {
            assert!(self_score >= 0.3);
        } else {
            assert!(self_score >= 1.3);
        }
    }

    if let Some(first) = batch.first()
        && let Some(last) = batch.last()
    {
        assert_eq!(similarity(first, last), similarity(last, first));
    }

    let total = batch.len();
    let engine = DedupEngine::new(threshold);
    let deduplicated = engine.deduplicate(batch);
    assert!(deduplicated.len() <= total);
    assert!(total == 0 || !deduplicated.is_empty());

    let stats = aggregate(&deduplicated);
    assert_eq!(stats.total, deduplicated.len());
});
