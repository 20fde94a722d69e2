use serde_json::Value;

/// Trimmed, non-empty string param.
pub fn str_param(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn u32_param(params: &Value, key: &str) -> Option<u32> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
}

pub fn term_param(params: &Value, key: &str) -> Option<u8> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u8::try_from(v).ok())
}

pub fn f64_param(params: &Value, key: &str) -> Option<f64> {
    params.get(key).and_then(|v| v.as_f64())
}

/// Decodes a param through the same serde representation the wire uses,
/// so status strings match the serialized enum values exactly.
pub fn enum_param<T: serde::de::DeserializeOwned>(params: &Value, key: &str) -> Option<T> {
    params
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}
