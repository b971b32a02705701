use thiserror::Error;

/// Errors that can occur when using the infohub library.
///
/// `Validation` is detected before any service call is made; every other
/// variant is a service-class failure detected after a call. Widgets collapse
/// all service-class failures into one generic user-facing message.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion service error: {message}")]
    Service { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("response did not match the requested schema: {0}")]
    SchemaMismatch(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn service(message: impl Into<String>) -> Self {
        Error::Service {
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Error::SchemaMismatch(message.into())
    }

    /// Whether this error was raised before any service call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
