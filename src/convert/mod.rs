pub mod json_utils;
pub mod transcode;
pub mod xml;

pub use transcode::{convert_from_json, convert_from_xml, convert_from_yaml, derive_siblings};
