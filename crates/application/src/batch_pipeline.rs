use std::sync::Arc;

use domain::alert::entity::{self, EnrichedAlert, RawAlert};
use domain::common::error::DomainError;
use domain::dedup::engine::DedupEngine;
use domain::stats::engine::aggregate;
use domain::stats::entity::BatchStats;
use ports::secondary::id_provider::IdProvider;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// One batch of raw alerts submitted to the pipeline, with a one-shot
/// channel for the outcome.
pub struct BatchRequest {
    pub alerts: Vec<RawAlert>,
    pub reply: oneshot::Sender<Result<BatchOutcome, DomainError>>,
}

/// Result of processing one batch: the surviving enriched alerts, their
/// summary stats, and how many near-duplicates were folded away.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub alerts: Vec<EnrichedAlert>,
    pub stats: BatchStats,
    pub duplicates_removed: usize,
}

/// Batch pipeline application service.
///
/// Sanitizes and validates incoming raw alerts, enriches them
/// (normalization, keyword extraction, categorization, confidence scoring),
/// folds near-duplicates through the `DedupEngine`, and aggregates batch
/// statistics. Persistence and transport of the outcome belong to the
/// caller.
pub struct BatchPipeline {
    dedup: DedupEngine,
    ids: Arc<dyn IdProvider>,
}

impl BatchPipeline {
    pub fn new(dedup: DedupEngine, ids: Arc<dyn IdProvider>) -> Self {
        Self { dedup, ids }
    }

    /// Process one batch end to end.
    ///
    /// Returns `Err` only for boundary-contract violations (empty or
    /// oversized batch, messages empty after sanitization); the enrichment
    /// and dedup core is total and cannot fail.
    pub fn process_batch(&self, alerts: Vec<RawAlert>) -> Result<BatchOutcome, DomainError> {
        let alerts: Vec<RawAlert> = alerts
            .into_iter()
            .map(|mut alert| {
                alert.message = entity::sanitize_message(&alert.message);
                alert
            })
            .collect();
        entity::validate_batch(&alerts)?;

        let batch_token = self.ids.batch_token();
        let total_in = alerts.len();

        let enriched: Vec<EnrichedAlert> = alerts
            .into_iter()
            .enumerate()
            .map(|(index, raw)| EnrichedAlert::from_raw(raw, index, &batch_token))
            .collect();

        let deduplicated = self.dedup.deduplicate(enriched);
        let duplicates_removed = total_in - deduplicated.len();
        let stats = aggregate(&deduplicated);

        tracing::debug!(
            batch_token = %batch_token,
            total_in,
            retained = deduplicated.len(),
            duplicates_removed,
            high_confidence = stats.high_confidence_count,
            threshold = self.dedup.threshold(),
            "batch processed"
        );

        Ok(BatchOutcome {
            alerts: deduplicated,
            stats,
            duplicates_removed,
        })
    }

    /// Async run loop: consumes batch requests from the channel, processes
    /// each one, and drains on cancellation.
    pub async fn run(self, mut rx: mpsc::Receiver<BatchRequest>, cancel_token: CancellationToken) {
        let mut count: u64 = 0;

        loop {
            tokio::select! {
                () = cancel_token.cancelled() => {
                    // Drain remaining requests before exiting
                    while let Ok(request) = rx.try_recv() {
                        count += 1;
                        self.handle(request);
                    }
                    break;
                }
                msg = rx.recv() => {
                    match msg {
                        Some(request) => {
                            count += 1;
                            self.handle(request);
                        }
                        None => break, // channel closed
                    }
                }
            }
        }

        tracing::info!(total_batches = count, "batch pipeline stopped");
    }

    fn handle(&self, request: BatchRequest) {
        let outcome = self.process_batch(request.alerts);
        if let Err(e) = &outcome {
            tracing::debug!(error = %e, "batch rejected");
        }
        if request.reply.send(outcome).is_err() {
            tracing::warn!("batch reply dropped: requester went away");
        }
    }
}
