use async_trait::async_trait;
use notable_core::LookupResult;

/// An authoritative source that can say whether a name matches a known article.
///
/// Implementations never return an error: transport and parse failures are
/// encoded as [`notable_core::LookupOutcome::Failed`].
#[async_trait]
pub trait LookupSource: Send + Sync {
    async fn lookup(&self, first: &str, last: &str) -> LookupResult;

    /// Human-readable name for this source (e.g., "wikipedia").
    fn source_name(&self) -> &str;
}
