use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::core::WidgetCore;
use crate::service::CompletionService;
use crate::{QueryRequest, ResponseSchema, WidgetState};

/// Motivational quote generator. Takes no user input.
pub struct QuoteWidget {
    core: WidgetCore,
    mounted: AtomicBool,
}

impl QuoteWidget {
    const FAILURE_MESSAGE: &'static str = "Could not fetch quote. Please try again.";

    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            core: WidgetCore::new(service),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.core.state()
    }

    /// Fetch a first quote once. Subsequent calls are no-ops.
    pub async fn mount(&self) {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.refresh().await;
        }
    }

    /// Fetch a fresh quote.
    pub async fn refresh(&self) {
        let prompt = "Generate a powerful, inspiring motivational quote. Include the \
                      quote text and the author. Make it unique and uplifting.";
        let request = match QueryRequest::new(prompt) {
            Ok(request) => request.with_schema(Self::schema()),
            Err(_) => {
                self.core.fail_validation(Self::FAILURE_MESSAGE);
                return;
            }
        };

        self.core.run(request, Self::FAILURE_MESSAGE).await;
    }

    fn schema() -> ResponseSchema {
        ResponseSchema::object().string("quote").string("author")
    }
}
