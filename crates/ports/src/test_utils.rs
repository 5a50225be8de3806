use std::sync::atomic::{AtomicU64, Ordering};

use crate::secondary::id_provider::IdProvider;

/// Deterministic id provider for tests: tokens are `{prefix}-0`,
/// `{prefix}-1`, ... in call order.
pub struct FixedIdProvider {
    prefix: String,
    counter: AtomicU64,
}

impl FixedIdProvider {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdProvider for FixedIdProvider {
    fn batch_token(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
