// Protobuf playground: schema inference from a JSON sample plus size stats.
use serde::Serialize;
use serde_json::Value;

pub mod infer;
pub mod schema;
pub mod size;

pub use infer::infer_proto_type;
pub use schema::generate_proto_schema;
pub use size::{compare_sizes, SizeComparison};

/// Everything the playground shows for one sample: the generated schema, the
/// binary proxy rendered as hex, and the size comparison.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaBundle {
    pub schema: String,
    pub binary_hex: String,
    pub stats: SizeComparison,
}

/// Runs the full playground pipeline for a message name and JSON sample.
///
/// The binary proxy is the UTF-8 encoding of the sample's compact JSON text;
/// no real protobuf wire encoding is produced. Any failure returns the error
/// alone, never a partial bundle.
pub fn generate_schema_bundle(message_name: &str, json_input: &str) -> Result<SchemaBundle, String> {
    if message_name.trim().is_empty() {
        return Err("Message name is required".into());
    }
    if json_input.trim().is_empty() {
        return Err("JSON input is required".into());
    }
    let data: Value = serde_json::from_str(json_input).map_err(|err| err.to_string())?;
    let schema = generate_proto_schema(message_name, &data);
    let binary = serde_json::to_string(&data)
        .map_err(|err| err.to_string())?
        .into_bytes();
    let stats = compare_sizes(&data, &binary)?;
    Ok(SchemaBundle {
        schema,
        binary_hex: hex_dump(&binary),
        stats,
    })
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases only the first character, the shape used for nested message
/// type names.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalized element-type name for a repeated field: a trailing `s` after
/// the first character is dropped, so `users` becomes `User`.
pub(crate) fn singular_type_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let rest = rest.strip_suffix('s').unwrap_or(rest);
            first.to_uppercase().collect::<String>() + rest
        }
        None => String::new(),
    }
}
