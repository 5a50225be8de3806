use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use ports::secondary::id_provider::IdProvider;

/// Production id provider.
///
/// Tokens embed the provider's creation time (millis since epoch) plus a
/// monotonic counter: unique within the process by the counter, unique
/// across restarts by the timestamp prefix, and readable in logs
/// (`1787565600000-42`).
#[derive(Debug)]
pub struct SystemIdProvider {
    epoch_ms: u128,
    counter: AtomicU64,
}

impl SystemIdProvider {
    pub fn new() -> Self {
        let epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self {
            epoch_ms,
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SystemIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SystemIdProvider {
    fn batch_token(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.epoch_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_never_repeat_within_provider() {
        let provider = SystemIdProvider::new();
        let a = provider.batch_token();
        let b = provider.batch_token();
        let c = provider.batch_token();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn tokens_share_the_creation_prefix() {
        let provider = SystemIdProvider::new();
        let prefix = format!("{}-", provider.epoch_ms);
        assert!(provider.batch_token().starts_with(&prefix));
        assert!(provider.batch_token().starts_with(&prefix));
    }
}
