use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::core::WidgetCore;
use crate::service::CompletionService;
use crate::{QueryRequest, ResponseSchema, WidgetState};

/// Current-weather lookup for a city.
pub struct WeatherWidget {
    core: WidgetCore,
    mounted: AtomicBool,
}

impl WeatherWidget {
    pub const DEFAULT_CITY: &'static str = "London";

    const FAILURE_MESSAGE: &'static str = "Could not fetch weather data. Please try again.";
    const VALIDATION_MESSAGE: &'static str = "Please enter a city name";

    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            core: WidgetCore::new(service),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.core.state()
    }

    /// Fetch the default city once. Subsequent calls are no-ops.
    pub async fn mount(&self) {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.fetch(Self::DEFAULT_CITY).await;
        }
    }

    /// Look up the current weather for `city`.
    pub async fn fetch(&self, city: &str) {
        let city = city.trim();
        if city.is_empty() {
            self.core.fail_validation(Self::VALIDATION_MESSAGE);
            return;
        }

        let prompt = format!(
            "Get the current weather for {city}. Include temperature in Celsius, \
             weather condition, humidity, wind speed, and visibility. Be accurate \
             and use real-time data."
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
            .string("city")
            .number("temperature")
            .string("condition")
            .number("humidity")
            .number("wind_speed")
            .number("visibility")
    }
}
