// Maps JSON sample values onto protobuf scalar and message type names.
use serde_json::{Number, Value};

use crate::proto::capitalize;

/// Infers the protobuf type name for one JSON value.
///
/// Integral numbers inside the signed 32-bit range map to `int32`, integral
/// numbers beyond it to `int64`, everything else numeric to `double`. Null
/// defaults to `string`. Arrays sample only their first element; an empty
/// array falls back to `repeated string`. Objects name the nested message by
/// capitalizing `field_name`; the message body itself is the schema
/// generator's job.
pub fn infer_proto_type(value: &Value, field_name: &str) -> String {
    match value {
        Value::Null => "string".into(),
        Value::String(_) => "string".into(),
        Value::Bool(_) => "bool".into(),
        Value::Number(num) => number_type(num).into(),
        Value::Array(items) => match items.first() {
            None => "repeated string".into(),
            Some(first) => format!("repeated {}", infer_proto_type(first, field_name)),
        },
        Value::Object(_) => capitalize(field_name),
    }
}

fn number_type(num: &Number) -> &'static str {
    if let Some(int) = num.as_i64() {
        return if int >= i64::from(i32::MIN) && int <= i64::from(i32::MAX) {
            "int32"
        } else {
            "int64"
        };
    }
    if num.as_u64().is_some() {
        // Beyond i64::MAX, so far beyond the int32 range.
        return "int64";
    }
    let float = num.as_f64().unwrap_or_default();
    if float.is_finite() && float.fract() == 0.0 {
        if float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX) {
            "int32"
        } else {
            "int64"
        }
    } else {
        "double"
    }
}
