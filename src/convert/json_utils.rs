// Lightweight JSON/YAML helpers shared by the format transcoder.
use serde_json::{Map, Number, Value};

/// Parses a JSON string into `serde_json::Value`, returning a human-readable error string.
///
/// # Example
/// ```
/// use converter_core::convert::json_utils::parse_json;
/// let value = parse_json("{\"id\":1}")?;
/// assert_eq!(value["id"], 1);
/// # Ok::<(), String>(())
/// ```
pub fn parse_json(input: &str) -> Result<Value, String> {
    serde_json::from_str(input).map_err(|err| err.to_string())
}

/// Encodes a JSON `Value` with optional minification, trimming trailing newlines
/// so the output is UI-friendly. Pretty output uses 2-space indentation.
///
/// # Example
/// ```
/// use serde_json::json;
/// use converter_core::convert::json_utils::encode_json;
/// let text = encode_json(&json!({"a":1}), true)?;
/// assert_eq!(text, "{\"a\":1}");
/// # Ok::<(), String>(())
/// ```
pub fn encode_json(value: &Value, minify: bool) -> Result<String, String> {
    let serialized = if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|err| err.to_string())?;
    Ok(serialized.trim_end().to_string())
}

/// Converts a `serde_yaml::Value` into a JSON `Value`, normalizing tagged values too.
///
/// Mapping keys keep their document order; non-string keys are re-rendered
/// through the YAML serializer so every key lands as a string.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Value::Number(Number::from(u))
            } else if let Some(f) = num.as_f64() {
                Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            let items = seq.into_iter().map(yaml_to_json).collect();
            Value::Array(items)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = Map::new();
            for (k, v) in map.into_iter() {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    other => serde_yaml::to_string(&other)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                };
                obj.insert(key, yaml_to_json(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => {
            let tagged_value = *tagged;
            yaml_to_json(tagged_value.value)
        }
    }
}
