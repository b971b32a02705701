//! Prompted-query widgets and their shared engine.

pub mod core;
pub mod currency;
pub mod quote;
pub mod state;
pub mod weather;

pub use self::core::WidgetCore;
pub use currency::CurrencyWidget;
pub use quote::QuoteWidget;
pub use state::WidgetState;
pub use weather::WeatherWidget;
