// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Input schemas for registered tools.
//!
//! Schemas are plain JSON Schema objects. [`InputSchema`] builds the common
//! flat shape (`type: object` with primitive properties); tools that need more
//! can hand a raw `serde_json::Value` to the registry instead.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Primitive JSON types a tool argument can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// JSON string
    String,
    /// Any JSON number
    Number,
    /// JSON number without a fractional part
    Integer,
    /// JSON boolean
    Boolean,
    /// JSON object
    Object,
    /// JSON array
    Array,
}

impl ParamType {
    /// Returns the JSON Schema keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array => "array",
        }
    }

    /// Parses a JSON Schema type keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(ParamType::String),
            "number" => Some(ParamType::Number),
            "integer" => Some(ParamType::Integer),
            "boolean" => Some(ParamType::Boolean),
            "object" => Some(ParamType::Object),
            "array" => Some(ParamType::Array),
            _ => None,
        }
    }

    /// Returns true if `value` is an instance of this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
            }
            ParamType::Boolean => value.is_boolean(),
            ParamType::Object => value.is_object(),
            ParamType::Array => value.is_array(),
        }
    }
}

/// Builder for flat object schemas.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl InputSchema {
    /// Starts an object schema with no properties.
    pub fn object() -> Self {
        Self::default()
    }

    /// Adds a required property.
    pub fn required(mut self, name: impl Into<String>, param_type: ParamType) -> Self {
        let name = name.into();
        self.properties
            .insert(name.clone(), json!({ "type": param_type.as_str() }));
        self.required.push(name);
        self
    }

    /// Adds an optional property.
    pub fn optional(mut self, name: impl Into<String>, param_type: ParamType) -> Self {
        self.properties
            .insert(name.into(), json!({ "type": param_type.as_str() }));
        self
    }

    /// Produces the JSON Schema document.
    pub fn into_value(self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }
}

impl From<InputSchema> for Value {
    fn from(schema: InputSchema) -> Self {
        schema.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_builds_flat_object_schema() {
        let schema = InputSchema::object()
            .required("workbooksId", ParamType::String)
            .required("index", ParamType::Number)
            .optional("label", ParamType::String)
            .into_value();

        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "workbooksId": { "type": "string" },
                    "index": { "type": "number" },
                    "label": { "type": "string" }
                },
                "required": ["workbooksId", "index"]
            })
        );
    }

    #[test]
    fn test_empty_schema_has_no_required_properties() {
        let schema = InputSchema::object().into_value();
        assert_eq!(schema["required"], json!([]));
        assert_eq!(schema["properties"], json!({}));
    }

    #[test_case(ParamType::String, json!("x"), true)]
    #[test_case(ParamType::String, json!(1), false)]
    #[test_case(ParamType::Number, json!(1.5), true)]
    #[test_case(ParamType::Number, json!("1"), false)]
    #[test_case(ParamType::Integer, json!(3), true)]
    #[test_case(ParamType::Integer, json!(3.0), true)]
    #[test_case(ParamType::Integer, json!(3.5), false)]
    #[test_case(ParamType::Boolean, json!(false), true)]
    #[test_case(ParamType::Boolean, json!(0), false)]
    #[test_case(ParamType::Object, json!({}), true)]
    #[test_case(ParamType::Array, json!([]), true)]
    #[test_case(ParamType::Array, Value::Null, false)]
    fn test_param_type_matches(param_type: ParamType, value: Value, expected: bool) {
        assert_eq!(param_type.matches(&value), expected);
    }

    #[test]
    fn test_keywords_round_trip() {
        for param_type in [
            ParamType::String,
            ParamType::Number,
            ParamType::Integer,
            ParamType::Boolean,
            ParamType::Object,
            ParamType::Array,
        ] {
            assert_eq!(ParamType::from_keyword(param_type.as_str()), Some(param_type));
        }
        assert_eq!(ParamType::from_keyword("null"), None);
    }
}
