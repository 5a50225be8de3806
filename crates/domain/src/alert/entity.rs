use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::entity::ThreatCategory;

use super::error::AlertError;
use super::features;
use super::normalize::normalize;

/// Maximum characters per alert message.
pub const MAX_MESSAGE_LEN: usize = 5_000;

/// Maximum alerts per batch.
pub const MAX_BATCH_LEN: usize = 10_000;

/// A free-text alert as received from an ingestion source (file upload or
/// API body), before enrichment. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlert {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl RawAlert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: None,
            source: None,
            severity: None,
        }
    }

    /// Validate the boundary contract for a single alert: message present
    /// and within the length cap.
    pub fn validate(&self) -> Result<(), AlertError> {
        if self.message.is_empty() {
            return Err(AlertError::EmptyMessage);
        }
        let length = self.message.chars().count();
        if length > MAX_MESSAGE_LEN {
            return Err(AlertError::MessageTooLong {
                length,
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }
}

/// Validate a whole batch before it enters the pipeline: 1 to
/// [`MAX_BATCH_LEN`] alerts, each individually valid.
pub fn validate_batch(batch: &[RawAlert]) -> Result<(), AlertError> {
    if batch.is_empty() {
        return Err(AlertError::EmptyBatch);
    }
    if batch.len() > MAX_BATCH_LEN {
        return Err(AlertError::BatchTooLarge {
            length: batch.len(),
            max: MAX_BATCH_LEN,
        });
    }
    for alert in batch {
        alert.validate()?;
    }
    Ok(())
}

/// Strip control characters from an incoming message, truncate to the
/// message cap, and trim surrounding whitespace.
///
/// Tab, newline, and carriage return survive; everything else in the C0
/// range and DEL is dropped. Applied before validation so pasted alert
/// dumps with stray control bytes are cleaned rather than rejected.
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .take(MAX_MESSAGE_LEN)
        .filter(|&c| !matches!(c, '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// An alert after enrichment: canonical message form, extracted keywords,
/// threat category, and confidence score.
///
/// Enrichment is a one-shot transformation; no later pipeline stage mutates
/// these fields. Deduplication only selects a subset of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedAlert {
    /// Process-unique opaque identifier.
    pub id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Deterministic canonical form of `message` (see [`normalize`]).
    pub normalized_message: String,
    /// Vocabulary keywords found in `message`; order-irrelevant, no
    /// duplicates.
    pub keywords: BTreeSet<String>,
    pub threat_category: ThreatCategory,
    /// In [0.5, 1.0]; non-decreasing as more indicators match.
    pub confidence_score: f64,
}

impl EnrichedAlert {
    /// Enrich a raw alert.
    ///
    /// The id is `"{batch_token}-{sequence_index}"`. The caller must keep
    /// `batch_token` unique per batch and `sequence_index` unique within
    /// it; together they make the id process-unique.
    pub fn from_raw(raw: RawAlert, sequence_index: usize, batch_token: &str) -> Self {
        let normalized_message = normalize(&raw.message);
        let keywords = features::extract_keywords(&raw.message);
        let threat_category = features::categorize(&raw.message);
        let confidence_score = features::score_confidence(&raw.message);

        Self {
            id: format!("{batch_token}-{sequence_index}"),
            message: raw.message,
            timestamp: raw.timestamp,
            source: raw.source,
            severity: raw.severity,
            normalized_message,
            keywords,
            threat_category,
            confidence_score,
        }
    }
}
