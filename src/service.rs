use crate::{Error, QueryRequest, QueryResult};

/// A client for an external completion service.
///
/// Implementations must fail, not silently return partial data, on transport
/// errors, timeouts, and schema-incompatible responses. Widgets treat every
/// failure identically regardless of cause.
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync + 'static {
    /// Send one prompt and return its parsed result.
    async fn invoke(&self, request: &QueryRequest) -> Result<QueryResult, Error>;
}
