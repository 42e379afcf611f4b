//! Core engine for the format studio: three synchronized XML/JSON/YAML
//! editor panes and a protobuf schema playground, pivoting everything
//! through `serde_json::Value`.

pub mod convert;
pub mod proto;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod wasm;


pub use convert::transcode::{convert_from_json, convert_from_xml, convert_from_yaml};
pub use proto::{
    compare_sizes, generate_proto_schema, generate_schema_bundle, infer_proto_type, SchemaBundle,
    SizeComparison,
};
pub use session::{ConverterState, Format, VisibleFormats};
