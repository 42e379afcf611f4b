// Session state for the three synchronized format editors.
//
// Exactly one format is editable at a time; the other two are derived,
// read-only renderings of the same value. A failed conversion keeps the
// editable text verbatim and blanks the derived panes until the next
// successful parse.
use std::str::FromStr;

use serde::Serialize;

use crate::convert::transcode;

/// One of the three synchronized textual representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Yaml,
}

impl Format {
    /// Stable display order, also used when reassigning the active format.
    pub const ALL: [Format; 3] = [Format::Xml, Format::Json, Format::Yaml];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Upper-case name used in user-facing error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Xml => "XML",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// The two formats regenerated when this one is edited.
    pub fn siblings(&self) -> (Format, Format) {
        match self {
            Format::Xml => (Format::Json, Format::Yaml),
            Format::Json => (Format::Xml, Format::Yaml),
            Format::Yaml => (Format::Xml, Format::Json),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Per-format visibility toggles for the editor panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleFormats {
    pub xml: bool,
    pub json: bool,
    pub yaml: bool,
}

impl VisibleFormats {
    pub fn get(&self, format: Format) -> bool {
        match format {
            Format::Xml => self.xml,
            Format::Json => self.json,
            Format::Yaml => self.yaml,
        }
    }

    fn set(&mut self, format: Format, visible: bool) {
        match format {
            Format::Xml => self.xml = visible,
            Format::Json => self.json = visible,
            Format::Yaml => self.yaml = visible,
        }
    }
}

impl Default for VisibleFormats {
    fn default() -> Self {
        Self {
            xml: true,
            json: true,
            yaml: true,
        }
    }
}

/// The whole converter session: three texts, the active (editable) format,
/// pane visibility, the validity flag, and the last conversion error.
///
/// Serializes in the camelCase shape the UI stores it in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterState {
    xml_content: String,
    json_content: String,
    yaml_content: String,
    active_format: Format,
    visible_formats: VisibleFormats,
    is_data_valid: bool,
    error: Option<String>,
    fullscreen_format: Option<Format>,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            xml_content: String::new(),
            json_content: String::new(),
            yaml_content: String::new(),
            active_format: Format::Xml,
            visible_formats: VisibleFormats::default(),
            is_data_valid: false,
            error: None,
            fullscreen_format: None,
        }
    }
}

impl ConverterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self, format: Format) -> &str {
        match format {
            Format::Xml => &self.xml_content,
            Format::Json => &self.json_content,
            Format::Yaml => &self.yaml_content,
        }
    }

    pub fn active_format(&self) -> Format {
        self.active_format
    }

    pub fn is_data_valid(&self) -> bool {
        self.is_data_valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_visible(&self, format: Format) -> bool {
        self.visible_formats.get(format)
    }

    pub fn fullscreen_format(&self) -> Option<Format> {
        self.fullscreen_format
    }

    pub fn all_empty(&self) -> bool {
        self.xml_content.is_empty() && self.json_content.is_empty() && self.yaml_content.is_empty()
    }

    /// Stores `text` as the content of `format` and reruns the conversion
    /// pipeline with it as the source.
    ///
    /// Empty or whitespace-only input blanks the sibling panes without
    /// raising an error; a parse failure blanks them, records the error, and
    /// leaves the edited text untouched; success rewrites both siblings.
    pub fn edit(&mut self, format: Format, text: &str) {
        self.set_content(format, text.to_string());
        self.run_conversion(format);
    }

    /// Switches the editable format. Allowed only while the data is valid,
    /// or every pane is empty, or the format is already active; otherwise a
    /// no-op. Returns whether the switch took effect.
    pub fn request_activate(&mut self, format: Format) -> bool {
        if self.is_data_valid || self.all_empty() || self.active_format == format {
            self.active_format = format;
            true
        } else {
            false
        }
    }

    /// Flips the visibility of a pane. Hiding the active format hands
    /// activity to the first remaining visible format in `Format::ALL`
    /// order; hiding the last visible pane leaves the active format alone.
    pub fn toggle_visibility(&mut self, format: Format) {
        let now_visible = !self.visible_formats.get(format);
        self.visible_formats.set(format, now_visible);
        if self.active_format == format && !now_visible {
            if let Some(next) = Format::ALL
                .iter()
                .copied()
                .find(|candidate| self.visible_formats.get(*candidate))
            {
                self.active_format = next;
            }
        }
    }

    /// Display-only override; orthogonal to visibility and editability.
    pub fn set_fullscreen(&mut self, format: Format) {
        self.fullscreen_format = Some(format);
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen_format = None;
    }

    /// Blanks every pane and resets validity and error. Activation,
    /// visibility, and fullscreen are left as they are.
    pub fn clear_all(&mut self) {
        self.xml_content.clear();
        self.json_content.clear();
        self.yaml_content.clear();
        self.is_data_valid = false;
        self.error = None;
    }

    fn set_content(&mut self, format: Format, text: String) {
        match format {
            Format::Xml => self.xml_content = text,
            Format::Json => self.json_content = text,
            Format::Yaml => self.yaml_content = text,
        }
    }

    fn run_conversion(&mut self, source: Format) {
        let input = self.content(source).to_string();
        let (first, second) = source.siblings();
        if input.trim().is_empty() {
            self.set_content(first, String::new());
            self.set_content(second, String::new());
            self.is_data_valid = false;
            self.error = None;
            return;
        }
        match transcode::derive_siblings(source, &input) {
            Ok(outputs) => {
                for (target, text) in outputs {
                    self.set_content(target, text);
                }
                self.is_data_valid = true;
                self.error = None;
            }
            Err(message) => {
                self.set_content(first, String::new());
                self.set_content(second, String::new());
                self.is_data_valid = false;
                self.error = Some(message);
            }
        }
    }
}
