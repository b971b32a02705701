use std::sync::Arc;

use super::core::WidgetCore;
use crate::service::CompletionService;
use crate::{QueryRequest, ResponseSchema, WidgetState};

/// INR to USD/EUR conversion at live exchange rates.
///
/// Unlike the weather and quote widgets, this one never fires on mount; it
/// waits for the user to submit an amount.
pub struct CurrencyWidget {
    core: WidgetCore,
}

impl CurrencyWidget {
    /// Suggested pre-fill for the amount field.
    pub const DEFAULT_AMOUNT: &'static str = "100";

    const FAILURE_MESSAGE: &'static str = "Could not fetch currency rates. Please try again.";
    const VALIDATION_MESSAGE: &'static str = "Please enter a valid amount";

    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            core: WidgetCore::new(service),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.core.state()
    }

    /// Convert `amount` (raw form input) from INR to USD and EUR.
    ///
    /// The amount must parse as a finite number greater than zero; anything
    /// else fails fast with a validation message and makes no service call.
    pub async fn convert(&self, amount: &str) {
        let amount = amount.trim();
        let parsed = amount.parse::<f64>();
        match parsed {
            Ok(value) if value.is_finite() && value > 0.0 => {}
            _ => {
                self.core.fail_validation(Self::VALIDATION_MESSAGE);
                return;
            }
        }

        let prompt = format!(
            "Convert {amount} Indian Rupees (INR) to USD and EUR. Use the latest \
             real-time exchange rates. Be precise and accurate."
        );
        let request = match QueryRequest::new(prompt) {
            Ok(request) => request
                .with_internet_context()
                .with_schema(Self::schema()),
            Err(_) => {
                self.core.fail_validation(Self::VALIDATION_MESSAGE);
                return;
            }
        };

        self.core.run(request, Self::FAILURE_MESSAGE).await;
    }

    fn schema() -> ResponseSchema {
        ResponseSchema::object()
            .number("inr_amount")
            .number("usd_amount")
            .number("eur_amount")
            .number("usd_rate")
            .number("eur_rate")
    }
}
