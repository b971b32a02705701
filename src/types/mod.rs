//! Core types used throughout the library.

pub mod request;
pub mod result;
pub mod schema;

// Re-export commonly used types
pub use request::*;
pub use result::*;
pub use schema::*;
