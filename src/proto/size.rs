// JSON-versus-binary size bookkeeping for the protobuf playground.
use serde::Serialize;
use serde_json::Value;

/// Byte counts for the compact JSON text and the binary proxy, with the
/// rounded percentage saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeComparison {
    pub json_size: usize,
    pub binary_size: usize,
    pub savings_percent: i32,
}

/// Measures `value` as compact JSON against the supplied proxy bytes.
pub fn compare_sizes(value: &Value, binary: &[u8]) -> Result<SizeComparison, String> {
    let json_size = serde_json::to_string(value)
        .map_err(|err| err.to_string())?
        .len();
    Ok(SizeComparison {
        json_size,
        binary_size: binary.len(),
        savings_percent: savings_percent(json_size, binary.len()),
    })
}

pub(crate) fn savings_percent(json_size: usize, binary_size: usize) -> i32 {
    if json_size == 0 {
        return 0;
    }
    let saved = (json_size as f64 - binary_size as f64) / json_size as f64;
    (saved * 100.0).round() as i32
}
