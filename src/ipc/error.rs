use serde_json::json;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(id: &str, code: &str, message: impl Into<String>) -> serde_json::Value {
    json!({
        "id": id,
        "ok": false,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

pub fn bad_params(id: &str, message: impl Into<String>) -> serde_json::Value {
    err(id, "bad_params", message)
}

pub fn not_found(id: &str, message: impl Into<String>) -> serde_json::Value {
    err(id, "not_found", message)
}
