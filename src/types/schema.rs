use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::Error;

/// Expected type of a single response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    String,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::String => "string",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::Number => value.is_number(),
            FieldType::String => value.is_string(),
        }
    }
}

/// A descriptor for the JSON object a completion should return.
///
/// Serializes to the wire shape the invoke endpoint expects:
/// `{"type": "object", "properties": {<name>: {"type": <type>}}}`.
/// Declared fields are optional in the response; a present field with the
/// wrong type is a schema mismatch.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    properties: Vec<(String, FieldType)>,
}

impl ResponseSchema {
    /// Create an empty object schema.
    pub fn object() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Declare a numeric property.
    pub fn number(mut self, name: impl Into<String>) -> Self {
        self.properties.push((name.into(), FieldType::Number));
        self
    }

    /// Declare a string property.
    pub fn string(mut self, name: impl Into<String>) -> Self {
        self.properties.push((name.into(), FieldType::String));
        self
    }

    /// The declared properties, in declaration order.
    pub fn properties(&self) -> &[(String, FieldType)] {
        &self.properties
    }

    /// Check a returned value against this schema.
    ///
    /// The value must be a JSON object. Every declared property that is
    /// present must carry the declared type; absent properties and extra
    /// undeclared properties are allowed.
    pub fn validate(&self, value: &Value) -> Result<(), Error> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::schema("expected a JSON object"))?;

        for (name, field_type) in &self.properties {
            if let Some(field) = object.get(name) {
                if !field.is_null() && !field_type.matches(field) {
                    return Err(Error::schema(format!(
                        "field '{name}' should be a {}",
                        field_type.name()
                    )));
                }
            }
        }

        Ok(())
    }

    fn to_value(&self) -> Value {
        let mut properties = Map::new();
        for (name, field_type) in &self.properties {
            properties.insert(name.clone(), json!({ "type": field_type.name() }));
        }
        json!({ "type": "object", "properties": properties })
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
