use serde::Serialize;

use super::schema::ResponseSchema;
use crate::Error;

/// A single invocation request for the completion service.
///
/// The `prompt` is always non-empty; construction fails otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub prompt: String,
    pub add_context_from_internet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json_schema: Option<ResponseSchema>,
}

impl QueryRequest {
    /// Create a request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Result<Self, Error> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::validation("prompt must be non-empty"));
        }
        Ok(Self {
            prompt,
            add_context_from_internet: false,
            response_json_schema: None,
        })
    }

    /// Allow the service to pull live internet context when answering.
    pub fn with_internet_context(mut self) -> Self {
        self.add_context_from_internet = true;
        self
    }

    /// Request a structured response conforming to the given schema.
    pub fn with_schema(mut self, schema: ResponseSchema) -> Self {
        self.response_json_schema = Some(schema);
        self
    }

    /// The declared response schema, if any.
    pub fn schema(&self) -> Option<&ResponseSchema> {
        self.response_json_schema.as_ref()
    }
}
