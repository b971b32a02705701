use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::wire::InvokeRequest;
use crate::service::CompletionService;
use crate::{Error, QueryRequest, QueryResult};

/// Client for the hosted invoke-llm HTTP endpoint.
///
/// The widgets configure no timeout of their own; the 60 second default here
/// is an implementation detail of this client.
pub struct HttpCompletionService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HttpCompletionService {
    /// Create a new client for the hosted endpoint.
    pub fn new(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    fn invoke_url(&self) -> String {
        format!("{}/integrations/invoke-llm", self.base_url)
    }
}

#[async_trait::async_trait]
impl CompletionService for HttpCompletionService {
    async fn invoke(&self, request: &QueryRequest) -> Result<QueryResult, Error> {
        let body = InvokeRequest::from_query(request);

        let response = self
            .client
            .post(self.invoke_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::service(format!(
                "invoke failed with status {status}: {error_text}"
            )));
        }

        match request.schema() {
            Some(schema) => {
                let text = response.text().await?;
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| Error::service(format!("malformed response body: {e}")))?;
                schema.validate(&value)?;
                match value {
                    Value::Object(fields) => Ok(QueryResult::Structured(fields)),
                    // validate() already rejected non-objects
                    _ => Err(Error::schema("expected a JSON object")),
                }
            }
            None => {
                let text = response.text().await?;
                Ok(QueryResult::Text(text))
            }
        }
    }
}
