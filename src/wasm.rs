// Browser-facing bindings: the converter session and the protobuf playground.
use wasm_bindgen::prelude::*;

use crate::proto::generate_schema_bundle;
use crate::session::{ConverterState, Format};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// One converter session held on the Rust side; every mutation returns the
/// full camelCase state snapshot for the UI to render.
#[wasm_bindgen]
pub struct Session {
    state: ConverterState,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: ConverterState::new(),
        }
    }
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        Session::default()
    }

    pub fn edit(&mut self, format: &str, text: &str) -> Result<JsValue, JsValue> {
        let format = parse_format(format)?;
        self.state.edit(format, text);
        self.snapshot()
    }

    pub fn request_activate(&mut self, format: &str) -> Result<bool, JsValue> {
        let format = parse_format(format)?;
        Ok(self.state.request_activate(format))
    }

    pub fn toggle_visibility(&mut self, format: &str) -> Result<JsValue, JsValue> {
        let format = parse_format(format)?;
        self.state.toggle_visibility(format);
        self.snapshot()
    }

    pub fn set_fullscreen(&mut self, format: &str) -> Result<JsValue, JsValue> {
        let format = parse_format(format)?;
        self.state.set_fullscreen(format);
        self.snapshot()
    }

    pub fn exit_fullscreen(&mut self) -> Result<JsValue, JsValue> {
        self.state.exit_fullscreen();
        self.snapshot()
    }

    pub fn clear_all(&mut self) -> Result<JsValue, JsValue> {
        self.state.clear_all();
        self.snapshot()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

/// Generates the proto schema, hex-rendered binary proxy, and size stats for
/// a message name and JSON sample.
#[wasm_bindgen]
pub fn generate_protobuf(message_name: &str, json_input: &str) -> Result<JsValue, JsValue> {
    let bundle =
        generate_schema_bundle(message_name, json_input).map_err(|err| JsValue::from_str(&err))?;
    serde_wasm_bindgen::to_value(&bundle).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn parse_format(name: &str) -> Result<Format, JsValue> {
    name.parse::<Format>().map_err(|err| JsValue::from_str(&err))
}
