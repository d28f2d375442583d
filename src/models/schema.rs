use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    Boolean,
    String,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Boolean => "boolean",
            PropertyKind::String => "string",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaProperty {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub nullable: bool,
    pub description: &'static str,
    pub default: Value,
}

/// Declarative shape of a structured answer, forwarded to whoever answers an
/// elicitation.
#[derive(Debug, Clone)]
pub struct SchemaDescription {
    pub title: &'static str,
    pub properties: Vec<SchemaProperty>,
}

impl SchemaDescription {
    pub fn property_names(&self) -> Vec<&'static str> {
        self.properties.iter().map(|p| p.name).collect()
    }

    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for prop in &self.properties {
            let kind = if prop.nullable {
                json!([prop.kind.as_str(), "null"])
            } else {
                json!(prop.kind.as_str())
            };
            properties.insert(
                prop.name.to_string(),
                json!({
                    "type": kind,
                    "title": prop.name,
                    "description": prop.description,
                    "default": prop.default,
                }),
            );
        }

        json!({
            "title": self.title,
            "type": "object",
            "properties": properties,
        })
    }
}
