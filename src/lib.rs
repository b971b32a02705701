//! Prompted-query dashboard widgets backed by a hosted LLM completion service.
//!
//! This library provides the shared fetch-and-render contract of a small
//! dashboard: each widget builds a natural-language prompt (optionally with a
//! JSON output schema), invokes an injected completion service, and exposes
//! `Idle / Loading / Success / Failed` state for a renderer to read.

pub mod error;
pub mod hub;
pub mod service;
pub mod services;
pub mod types;
pub mod widget;

// Re-export core types for easy usage
pub use error::Error;
pub use hub::InfoHub;
pub use service::CompletionService;
pub use services::HttpCompletionService;
pub use types::*;
pub use widget::{CurrencyWidget, QuoteWidget, WeatherWidget, WidgetCore, WidgetState};
