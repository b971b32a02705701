use serde::Serialize;

use crate::types::ResponseSchema;

/// Invoke endpoint request body.
#[derive(Debug, Clone, Serialize)]
pub struct InvokeRequest {
    pub prompt: String,
    pub add_context_from_internet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json_schema: Option<ResponseSchema>,
}

impl InvokeRequest {
    pub fn from_query(request: &crate::QueryRequest) -> Self {
        Self {
            prompt: request.prompt.clone(),
            add_context_from_internet: request.add_context_from_internet,
            response_json_schema: request.response_json_schema.clone(),
        }
    }
}
