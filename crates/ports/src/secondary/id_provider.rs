/// Secondary port supplying per-batch identifier tokens.
///
/// The pipeline combines each token with a per-alert sequence index to mint
/// alert ids, so every call must return a token that never repeats within
/// the process. Injected as a capability rather than read from a clock or a
/// process-wide counter, so id generation is reproducible in tests. The
/// trait is object-safe for use behind `Arc<dyn IdProvider>`.
pub trait IdProvider: Send + Sync {
    /// Produce the token for one batch.
    fn batch_token(&self) -> String;
}
