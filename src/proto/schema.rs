// Emits proto3 message definitions inferred from a JSON sample.
use serde_json::Value;

use crate::proto::infer::infer_proto_type;
use crate::proto::{capitalize, singular_type_name};

/// Generates a complete `.proto` text for `data`: a single
/// `syntax = "proto3";` header followed by the message tree.
///
/// Field numbers start at 1 and follow the object's insertion order. A
/// nested object becomes a field of its capitalized type with the message
/// definition appended after the parent closes; an array of objects becomes
/// a `repeated` field of the singularized type, sampled from the first
/// element. A top-level array is wrapped in a message holding
/// `repeated <Name>Item items = 1;`. Colliding nested message names are
/// emitted as-is, without renaming or merging.
pub fn generate_proto_schema(message_name: &str, data: &Value) -> String {
    let mut proto = String::from("syntax = \"proto3\";\n\n");
    proto.push_str(&message_text(message_name, data, 0));
    proto
}

fn message_text(message_name: &str, data: &Value, indent: usize) -> String {
    let spaces = "  ".repeat(indent);
    if let Value::Array(items) = data {
        return match items.first() {
            None => format!(
                "{spaces}message {message_name} {{\n{spaces}  // Empty array\n{spaces}}}\n"
            ),
            Some(first) => {
                let item_name = format!("{message_name}Item");
                let item_schema = message_text(&item_name, first, indent);
                format!(
                    "{item_schema}\n{spaces}message {message_name} {{\n{spaces}  repeated {item_name} items = 1;\n{spaces}}}\n"
                )
            }
        };
    }
    let mut proto = format!("{spaces}message {message_name} {{\n");
    let mut nested: Vec<(String, &Value)> = Vec::new();
    if let Value::Object(map) = data {
        for (index, (key, value)) in map.iter().enumerate() {
            let number = index + 1;
            match value {
                Value::Object(_) => {
                    let nested_name = capitalize(key);
                    proto.push_str(&format!("{spaces}  {nested_name} {key} = {number};\n"));
                    nested.push((nested_name, value));
                }
                Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
                    let nested_name = singular_type_name(key);
                    proto.push_str(&format!(
                        "{spaces}  repeated {nested_name} {key} = {number};\n"
                    ));
                    nested.push((nested_name, &items[0]));
                }
                _ => {
                    let field_type = infer_proto_type(value, key);
                    proto.push_str(&format!("{spaces}  {field_type} {key} = {number};\n"));
                }
            }
        }
    }
    proto.push_str(&format!("{spaces}}}\n"));
    for (name, data) in nested {
        proto.push('\n');
        proto.push_str(&message_text(&name, data, indent));
    }
    proto
}
