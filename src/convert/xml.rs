// XML ↔ Value coercion: attribute maps, duplicate-tag arrays, typed text scalars.
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::map::Entry;
use serde_json::{Map, Number, Value};

/// Map keys carrying this prefix render as XML attributes when building.
pub const ATTRIBUTE_PREFIX: &str = "@_";
/// Map key whose value renders as the element's text content when building.
pub const TEXT_KEY: &str = "#text";

/// Parses an XML document and coerces its root element into a JSON `Value`.
///
/// Attributes become string entries of the element map, element children are
/// inserted under their tag names (a second occurrence of the same tag
/// promotes the entry to an array), and text content is typed by literal
/// shape: integer, then decimal number, then `true`/`false`, then `null`,
/// falling back to the raw string. An element whose iteration reaches a
/// non-empty text node collapses to that scalar alone, dropping any
/// attributes or siblings gathered before it.
pub fn xml_to_value(input: &str) -> Result<Value, String> {
    let root = parse_document(input)?;
    Ok(element_to_value(&root))
}

/// Renders a JSON `Value` as a formatted XML document under a `<root>` wrapper.
///
/// Two-space indentation per depth; `@_`-prefixed keys become attributes,
/// `#text` becomes element text, arrays repeat the enclosing tag name, and
/// scalar-only elements stay on one line.
pub fn value_to_xml(value: &Value) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    build_element(&mut out, "root", value, 0);
    out
}

#[derive(Debug, Clone)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug, Clone)]
enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

fn parse_document(input: &str) -> Result<XmlElement, String> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) => {
                stack.push(read_element(&tag)?);
            }
            Ok(Event::Empty(tag)) => {
                let node = read_element(&tag)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut root, node)?;
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    let text = text.unescape().map_err(|err| err.to_string())?;
                    current.children.push(XmlNode::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    current.children.push(XmlNode::Text(text));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.to_string()),
            _ => {}
        }
        buf.clear();
    }
    if !stack.is_empty() {
        return Err("unexpected end of document".into());
    }
    root.ok_or_else(|| "missing root element".into())
}

fn read_element(tag: &BytesStart) -> Result<XmlElement, String> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).trim().to_string();
    let mut node = XmlElement::new(name);
    for attr in tag.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    node: XmlElement,
) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(node));
    } else if root.is_some() {
        return Err("document has more than one root element".into());
    } else {
        *root = Some(node);
    }
    Ok(())
}

fn element_to_value(el: &XmlElement) -> Value {
    let mut map = Map::new();
    for (name, value) in &el.attributes {
        map.insert(name.clone(), Value::String(value.clone()));
    }
    for child in &el.children {
        match child {
            XmlNode::Element(child_el) => {
                let value = element_to_value(child_el);
                match map.entry(child_el.name.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                    Entry::Occupied(mut slot) => {
                        let existing = slot.get_mut();
                        if let Value::Array(items) = existing {
                            items.push(value);
                        } else {
                            // Second occurrence of a tag retroactively turns
                            // the field into an array.
                            let first = existing.take();
                            *existing = Value::Array(vec![first, value]);
                        }
                    }
                }
            }
            XmlNode::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    // A meaningful text node wins over everything collected so far.
                    return scalar_from_text(text);
                }
            }
        }
    }
    Value::Object(map)
}

fn scalar_from_text(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::Number(Number::from(int));
    }
    if let Ok(uint) = text.parse::<u64>() {
        return Value::Number(Number::from(uint));
    }
    if text.contains('.') {
        if let Ok(float) = text.parse::<f64>() {
            if let Some(num) = Number::from_f64(float) {
                return Value::Number(num);
            }
        }
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(text.to_string()),
    }
}

fn build_element(buf: &mut String, name: &str, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            let mut attrs = String::new();
            let mut text: Option<String> = None;
            let mut children: Vec<(&String, &Value)> = Vec::new();
            for (key, child) in map {
                if let Some(attr_name) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    attrs.push_str(&format!(
                        " {attr_name}=\"{}\"",
                        escape_attribute(&scalar_text(child))
                    ));
                } else if key == TEXT_KEY {
                    text = Some(scalar_text(child));
                } else {
                    children.push((key, child));
                }
            }
            if children.is_empty() {
                match text {
                    Some(text) if !text.is_empty() => buf.push_str(&format!(
                        "{indent}<{name}{attrs}>{}</{name}>\n",
                        escape_text(&text)
                    )),
                    _ => buf.push_str(&format!("{indent}<{name}{attrs}/>\n")),
                }
            } else {
                buf.push_str(&format!("{indent}<{name}{attrs}>\n"));
                if let Some(text) = text {
                    if !text.is_empty() {
                        buf.push_str(&format!(
                            "{}{}\n",
                            "  ".repeat(depth + 1),
                            escape_text(&text)
                        ));
                    }
                }
                for (key, child) in children {
                    build_element(buf, key, child, depth + 1);
                }
                buf.push_str(&format!("{indent}</{name}>\n"));
            }
        }
        Value::Array(items) => {
            for item in items {
                build_element(buf, name, item, depth);
            }
        }
        _ => {
            let text = scalar_text(value);
            buf.push_str(&format!(
                "{indent}<{name}>{}</{name}>\n",
                escape_text(&text)
            ));
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}
