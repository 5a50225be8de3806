use thiserror::Error;

/// Boundary-contract violations for raw alert input.
///
/// The enrichment and dedup core is total; these errors only arise from the
/// validation applied before a batch enters the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("alert message must not be empty")]
    EmptyMessage,

    #[error("alert message too long: {length} chars (max {max})")]
    MessageTooLong { length: usize, max: usize },

    #[error("batch must contain at least one alert")]
    EmptyBatch,

    #[error("batch too large: {length} alerts (max {max})")]
    BatchTooLarge { length: usize, max: usize },
}
