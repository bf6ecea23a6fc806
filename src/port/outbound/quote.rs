//! Quote source port.

use async_trait::async_trait;

use crate::domain::quote::QuoteSnapshot;
use crate::error::Result;

/// Pull-based source of the latest quote per instrument.
///
/// Called once per evaluation pass. The engine trusts whatever it returns;
/// staleness is the source's concern.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Latest known quotes.
    async fn latest_quotes(&self) -> Result<QuoteSnapshot>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
