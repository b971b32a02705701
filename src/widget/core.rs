use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::service::CompletionService;
use crate::{QueryRequest, WidgetState};

/// The generic engine shared by all prompted-query widgets.
///
/// Owns the widget state, a monotone request generation counter, and the
/// injected completion service. Each trigger issues exactly one in-flight
/// request; earlier in-flight requests are never cancelled, but a resolution
/// is applied only if no newer request was issued after it, so the state
/// always reflects the last request *issued* rather than the last to resolve.
pub struct WidgetCore {
    service: Arc<dyn CompletionService>,
    state: Mutex<WidgetState>,
    generation: AtomicU64,
}

impl WidgetCore {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            state: Mutex::new(WidgetState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    // The lock is held only across state mutation, never across an await.
    fn lock_state(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A snapshot of the current state, for renderers.
    pub fn state(&self) -> WidgetState {
        self.lock_state().clone()
    }

    /// Record a validation failure without issuing any request.
    pub fn fail_validation(&self, message: impl Into<String>) {
        *self.lock_state() = WidgetState::Failed(message.into());
    }

    /// Issue one request and apply its outcome.
    ///
    /// Any service-class failure is collapsed into `failure_message`; the
    /// underlying detail is logged and discarded.
    pub async fn run(&self, request: QueryRequest, failure_message: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = WidgetState::Loading;

        let outcome = self.service.invoke(&request).await;

        let next = match outcome {
            Ok(result) => WidgetState::Success(result),
            Err(error) => {
                tracing::warn!(%error, "prompted query failed");
                WidgetState::Failed(failure_message.to_string())
            }
        };

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "dropping stale query resolution");
            return;
        }
        *state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, QueryResult};
    use std::sync::atomic::AtomicUsize;

    struct StaticService {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StaticService {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionService for StaticService {
        async fn invoke(&self, request: &QueryRequest) -> Result<QueryResult, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::service("internal detail"))
            } else {
                Ok(QueryResult::Text(request.prompt.clone()))
            }
        }
    }

    #[tokio::test]
    async fn test_run_success_stores_result_verbatim() {
        let core = WidgetCore::new(Arc::new(StaticService::ok()));
        assert!(core.state().is_idle());

        let request = QueryRequest::new("hello").unwrap();
        core.run(request, "generic failure").await;

        let state = core.state();
        assert_eq!(
            state.result().and_then(QueryResult::as_text),
            Some("hello")
        );
    }

    #[tokio::test]
    async fn test_run_failure_uses_generic_message() {
        let core = WidgetCore::new(Arc::new(StaticService::failing()));
        let request = QueryRequest::new("hello").unwrap();
        core.run(request, "generic failure").await;

        let state = core.state();
        assert_eq!(state.error_message(), Some("generic failure"));
        // The internal detail must never leak to the user-facing message.
        assert!(!state.error_message().unwrap().contains("internal detail"));
    }

    #[tokio::test]
    async fn test_fail_validation_makes_no_call() {
        let service = Arc::new(StaticService::ok());
        let core = WidgetCore::new(service.clone());
        core.fail_validation("bad input");

        assert_eq!(core.state().error_message(), Some("bad input"));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
