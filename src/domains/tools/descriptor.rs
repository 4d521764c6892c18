//! Static tool metadata advertised to the host.

use rmcp::model::Tool;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// One accepted argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolProperty {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    /// Listed under `required` in the input schema.
    pub required: bool,
}

impl ToolProperty {
    /// An optional string-typed property.
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: "string",
            description,
            required: false,
        }
    }

    /// Mark the property as mandatory.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Name, description and calling convention of a tool.
///
/// Descriptors are declared as constants next to each tool and never change
/// after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub properties: &'static [ToolProperty],
}

impl ToolDescriptor {
    /// The property list as JSON, in declaration order, using the
    /// `propertyName` / `propertyType` / `description` keys.
    pub fn properties_json(&self) -> String {
        Value::Array(
            self.properties
                .iter()
                .map(|p| {
                    json!({
                        "propertyName": p.name,
                        "propertyType": p.kind,
                        "description": p.description,
                    })
                })
                .collect(),
        )
        .to_string()
    }

    /// JSON Schema object describing the tool arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({ "type": p.kind, "description": p.description }),
                )
            })
            .collect();

        let required: Vec<Value> = self
            .properties
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATLONG: ToolDescriptor = ToolDescriptor {
        name: "latlong",
        description: "Takes a position",
        properties: &[
            ToolProperty::string("latitude", "The latitude").required(),
            ToolProperty::string("longitude", "The longitude"),
        ],
    };

    #[test]
    fn test_properties_json_shape() {
        let parsed: Value = serde_json::from_str(&LATLONG.properties_json()).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"propertyName": "latitude", "propertyType": "string", "description": "The latitude"},
                {"propertyName": "longitude", "propertyType": "string", "description": "The longitude"},
            ])
        );
    }

    #[test]
    fn test_empty_properties_json() {
        let hello = ToolDescriptor {
            name: "hello",
            description: "",
            properties: &[],
        };
        assert_eq!(hello.properties_json(), "[]");
        assert_eq!(hello.input_schema()["properties"], json!({}));
        assert!(!hello.input_schema().contains_key("required"));
    }

    #[test]
    fn test_input_schema_lists_required() {
        let schema = LATLONG.input_schema();
        assert_eq!(schema["required"], json!(["latitude"]));
    }

    #[test]
    fn test_to_tool() {
        let tool = LATLONG.to_tool();
        assert_eq!(tool.name, "latlong");
        assert_eq!(tool.input_schema["type"], "object");
        assert_eq!(
            tool.input_schema["properties"]["longitude"]["type"],
            "string"
        );
    }
}
