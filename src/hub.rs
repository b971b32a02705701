use std::sync::Arc;

use crate::service::CompletionService;
use crate::widget::{CurrencyWidget, QuoteWidget, WeatherWidget};

/// The three dashboard widgets behind one shared completion service.
///
/// Widgets never share mutable state; each owns its own. A failure in one
/// widget is isolated from the others.
pub struct InfoHub {
    weather: WeatherWidget,
    currency: CurrencyWidget,
    quote: QuoteWidget,
}

impl InfoHub {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            weather: WeatherWidget::new(service.clone()),
            currency: CurrencyWidget::new(service.clone()),
            quote: QuoteWidget::new(service),
        }
    }

    /// Fire the mount-time fetches: weather and quote load their defaults
    /// concurrently, exactly once; the currency widget stays idle until the
    /// user submits an amount.
    pub async fn mount(&self) {
        futures::join!(self.weather.mount(), self.quote.mount());
    }

    pub fn weather(&self) -> &WeatherWidget {
        &self.weather
    }

    pub fn currency(&self) -> &CurrencyWidget {
        &self.currency
    }

    pub fn quote(&self) -> &QuoteWidget {
        &self.quote
    }
}
