use serde_json::{Map, Value};

/// The parsed output of one completion service invocation.
///
/// Structured when a response schema was requested, free text otherwise.
/// A result is created fresh per invocation and stored verbatim; it is
/// replaced wholesale on the next invocation, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Structured(Map<String, Value>),
    Text(String),
}

impl QueryResult {
    /// Look up a numeric field of a structured result.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self {
            QueryResult::Structured(fields) => fields.get(name).and_then(Value::as_f64),
            QueryResult::Text(_) => None,
        }
    }

    /// Look up a string field of a structured result.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self {
            QueryResult::Structured(fields) => fields.get(name).and_then(Value::as_str),
            QueryResult::Text(_) => None,
        }
    }

    /// The free-text body, for schema-less invocations.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QueryResult::Text(text) => Some(text),
            QueryResult::Structured(_) => None,
        }
    }

    /// The raw structured fields, if any.
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        match self {
            QueryResult::Structured(fields) => Some(fields),
            QueryResult::Text(_) => None,
        }
    }
}
