// Per-format conversion entry points driving the synchronized editors.
//
// Every source format is normalized through `serde_json::Value` so the two
// sibling representations regenerate from one parse. Failures stay local to
// the call: the caller only ever sees the error string, never a panic.
use serde_json::Value;

use crate::convert::json_utils::{encode_json, parse_json, yaml_to_json};
use crate::convert::xml::{value_to_xml, xml_to_value};
use crate::session::Format;

/// Converts XML text into its `(json, yaml)` siblings.
pub fn convert_from_xml(input: &str) -> Result<(String, String), String> {
    let fail = |err: String| conversion_error(Format::Xml, &err);
    let value = xml_to_value(input).map_err(fail)?;
    let json = encode_json(&value, false).map_err(fail)?;
    let yaml = dump_yaml(&value).map_err(fail)?;
    Ok((json, yaml))
}

/// Converts JSON text into its `(xml, yaml)` siblings.
pub fn convert_from_json(input: &str) -> Result<(String, String), String> {
    let fail = |err: String| conversion_error(Format::Json, &err);
    let value = parse_json(input).map_err(fail)?;
    let xml = value_to_xml(&value);
    let yaml = dump_yaml(&value).map_err(fail)?;
    Ok((xml, yaml))
}

/// Converts YAML text into its `(xml, json)` siblings.
pub fn convert_from_yaml(input: &str) -> Result<(String, String), String> {
    let fail = |err: String| conversion_error(Format::Yaml, &err);
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|err| fail(err.to_string()))?;
    let value = yaml_to_json(parsed);
    let xml = value_to_xml(&value);
    let json = encode_json(&value, false).map_err(fail)?;
    Ok((xml, json))
}

/// Dispatches to the entry point for `source`, pairing each derived text with
/// its target format.
pub fn derive_siblings(source: Format, input: &str) -> Result<[(Format, String); 2], String> {
    match source {
        Format::Xml => {
            let (json, yaml) = convert_from_xml(input)?;
            Ok([(Format::Json, json), (Format::Yaml, yaml)])
        }
        Format::Json => {
            let (xml, yaml) = convert_from_json(input)?;
            Ok([(Format::Xml, xml), (Format::Yaml, yaml)])
        }
        Format::Yaml => {
            let (xml, json) = convert_from_yaml(input)?;
            Ok([(Format::Xml, xml), (Format::Json, json)])
        }
    }
}

fn dump_yaml(value: &Value) -> Result<String, String> {
    serde_yaml::to_string(value).map_err(|err| err.to_string())
}

fn conversion_error(source: Format, message: &str) -> String {
    format!("Invalid {} format: {message}", source.label())
}
