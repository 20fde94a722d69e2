use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "careers": state.dataset.careers }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "careers.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
