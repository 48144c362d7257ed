//! Argument validation against the typed parameter structs.
//!
//! Deserialization into the tool's parameter struct is the authority on whether
//! arguments are valid. When it fails, the generated JSON schema is used to name
//! the fields that caused it, so the caller gets more than a bare serde message.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Turns raw arguments into the body forwarded to the backend.
pub type Validator = fn(JsonObject) -> Result<Value, serde_json::Error>;

/// Deserialize `arguments` as `T` and serialize it back.
///
/// The round trip fills declared defaults, drops unknown fields and omits
/// absent optional fields.
pub fn normalize<T>(arguments: JsonObject) -> Result<Value, serde_json::Error>
where
    T: DeserializeOwned + Serialize,
{
    let params: T = serde_json::from_value(Value::Object(arguments))?;
    serde_json::to_value(params)
}

/// JSON schema of `T` as an MCP input schema object.
pub fn input_schema<T: JsonSchema>() -> JsonObject {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(mut schema)) => {
            schema.remove("$schema");
            schema
        }
        _ => {
            let mut schema = JsonObject::new();
            schema.insert("type".to_string(), Value::String("object".to_string()));
            schema
        }
    }
}

/// Names of the fields in `arguments` that violate `schema`.
///
/// Reports required fields that are absent or null, then present fields whose
/// value does not have the declared type (sorted by name).
pub fn offending_fields(schema: &JsonObject, arguments: &JsonObject) -> Vec<String> {
    let mut fields = Vec::new();

    if let Some(Value::Array(required)) = schema.get("required") {
        for name in required.iter().filter_map(Value::as_str) {
            if arguments.get(name).map_or(true, Value::is_null) {
                fields.push(name.to_string());
            }
        }
    }

    if let Some(Value::Object(properties)) = schema.get("properties") {
        let mut mismatched: Vec<String> = arguments
            .iter()
            .filter(|(name, _)| !fields.contains(*name))
            .filter(|(name, value)| {
                properties
                    .get(name.as_str())
                    .is_some_and(|property| !conforms(value, property))
            })
            .map(|(name, _)| name.clone())
            .collect();
        mismatched.sort();
        fields.extend(mismatched);
    }

    fields
}

fn conforms(value: &Value, schema: &Value) -> bool {
    if let Some(declared) = schema.get("type") {
        if !matches_type(value, declared) {
            return false;
        }
    }

    match (value, schema.get("items")) {
        (Value::Array(items), Some(item_schema)) => {
            items.iter().all(|item| conforms(item, item_schema))
        }
        _ => true,
    }
}

fn matches_type(value: &Value, declared: &Value) -> bool {
    match declared {
        Value::String(name) => matches_named_type(value, name),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| matches_named_type(value, name)),
        _ => true,
    }
}

fn matches_named_type(value: &Value, name: &str) -> bool {
    match name {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::params::{ContactSearchParams, UpdateGroupParams};
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_input_schema_lists_required_fields() {
        let schema = input_schema::<ContactSearchParams>();
        assert_eq!(schema.get("type"), Some(&json!("object")));
        assert_eq!(schema.get("required"), Some(&json!(["query"])));
        assert!(!schema.contains_key("$schema"));

        let properties = schema.get("properties").and_then(Value::as_object).unwrap();
        assert_eq!(properties.len(), 8);
        assert_eq!(properties["limit"]["default"], json!(10));
    }

    #[test]
    fn test_normalize_drops_unknown_fields() {
        let body = normalize::<UpdateGroupParams>(object(json!({
            "group_id": 7,
            "colour": "blue"
        })))
        .unwrap();

        assert_eq!(
            body,
            json!({"group_id": 7, "add_contact_ids": [], "remove_contact_ids": []})
        );
    }

    #[test]
    fn test_offending_fields_reports_missing_required() {
        let schema = input_schema::<ContactSearchParams>();
        let fields = offending_fields(&schema, &object(json!({"limit": 5})));
        assert_eq!(fields, vec!["query".to_string()]);
    }

    #[test]
    fn test_offending_fields_reports_wrong_types() {
        let schema = input_schema::<ContactSearchParams>();
        let arguments = object(json!({
            "query": "founders",
            "limit": "five",
            "job_title": ["CEO", 3]
        }));

        let fields = offending_fields(&schema, &arguments);
        assert_eq!(fields, vec!["job_title".to_string(), "limit".to_string()]);
    }

    #[test]
    fn test_offending_fields_accepts_valid_arguments() {
        let schema = input_schema::<UpdateGroupParams>();
        let arguments = object(json!({
            "group_id": 7,
            "title": "Investors",
            "add_contact_ids": [1, 2, 3]
        }));

        assert!(offending_fields(&schema, &arguments).is_empty());
        assert!(normalize::<UpdateGroupParams>(arguments).is_ok());
    }
}
