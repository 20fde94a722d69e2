use serde_json::json;

use crate::ipc::error::{bad_params, not_found, ok};
use crate::ipc::helpers::{enum_param, str_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{ContractType, Professor, ProfessorStatus};

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    let status: Option<ProfessorStatus> = enum_param(&req.params, "status");
    let department = str_param(&req.params, "department");
    let search = str_param(&req.params, "search").map(|s| s.to_lowercase());

    let professors: Vec<&Professor> = state
        .dataset
        .professors
        .iter()
        .filter(|p| status.map_or(true, |s| p.status == s))
        .filter(|p| department.as_deref().map_or(true, |d| p.department == d))
        .filter(|p| {
            search.as_deref().map_or(true, |q| {
                p.name.to_lowercase().contains(q) || p.email.to_lowercase().contains(q)
            })
        })
        .collect();
    ok(&req.id, json!({ "professors": professors }))
}

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(name) = str_param(&req.params, "name") else {
        return bad_params(&req.id, "missing name");
    };
    let Some(email) = str_param(&req.params, "email") else {
        return bad_params(&req.id, "missing email");
    };
    let Some(department) = str_param(&req.params, "department") else {
        return bad_params(&req.id, "missing department");
    };
    let status = enum_param(&req.params, "status").unwrap_or(ProfessorStatus::Active);
    let contract_type = enum_param(&req.params, "contractType").unwrap_or(ContractType::PTC);

    // Continue the generated P-/DOC- numbering.
    let next = state
        .dataset
        .professors
        .iter()
        .filter_map(|p| p.id.strip_prefix("P-").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .map_or(100, |m| m + 1);

    let professor = Professor {
        id: format!("P-{next}"),
        employee_id: format!("DOC-{next}"),
        name,
        email,
        department,
        status,
        contract_type,
        courses_count: 0,
    };
    state.dataset.professors.push(professor.clone());
    ok(&req.id, json!({ "professor": professor }))
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let name = str_param(&req.params, "name");
    let email = str_param(&req.params, "email");
    let department = str_param(&req.params, "department");
    let status: Option<ProfessorStatus> = enum_param(&req.params, "status");
    let contract_type: Option<ContractType> = enum_param(&req.params, "contractType");

    let Some(professor) = state.dataset.professors.iter_mut().find(|p| p.id == id) else {
        return not_found(&req.id, format!("unknown professor {id}"));
    };
    // Renaming does not touch the email or any course's name snapshot.
    if let Some(v) = name {
        professor.name = v;
    }
    if let Some(v) = email {
        professor.email = v;
    }
    if let Some(v) = department {
        professor.department = v;
    }
    if let Some(v) = status {
        professor.status = v;
    }
    if let Some(v) = contract_type {
        professor.contract_type = v;
    }
    ok(&req.id, json!({ "professor": professor.clone() }))
}

/// Professors are retired, not removed: their courses keep referencing them.
fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let Some(professor) = state.dataset.professors.iter_mut().find(|p| p.id == id) else {
        return not_found(&req.id, format!("unknown professor {id}"));
    };
    professor.status = ProfessorStatus::Inactive;
    ok(&req.id, json!({ "professor": professor.clone() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "professors.list" => Some(handle_list(state, req)),
        "professors.create" => Some(handle_create(state, req)),
        "professors.update" => Some(handle_update(state, req)),
        "professors.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
