//! Completion service implementations.

pub mod http;
pub mod wire;

pub use http::HttpCompletionService;
