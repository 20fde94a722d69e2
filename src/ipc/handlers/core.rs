use serde_json::json;

use crate::ipc::error::{bad_params, err, ok};
use crate::ipc::helpers::str_param;
use crate::ipc::types::{AppState, Request};
use crate::model::{User, UserRole};
use crate::seed;

fn handle_health(state: &AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "counts": {
                "careers": state.dataset.careers.len(),
                "curriculum": state.dataset.curriculum.len(),
                "professors": state.dataset.professors.len(),
                "students": state.dataset.students.len(),
                "courses": state.dataset.courses.len(),
            }
        }),
    )
}

/// No credential checking: the login resolves the requested role to a real
/// generated record when one matches the email, or falls back to the first
/// record of that role as demo credentials.
fn handle_login(state: &AppState, req: &Request) -> serde_json::Value {
    let Some(role) = str_param(&req.params, "role") else {
        return bad_params(&req.id, "missing params.role");
    };
    let email = str_param(&req.params, "email");

    let user = match role.as_str() {
        "student" => state
            .dataset
            .students
            .iter()
            .find(|s| Some(&s.email) == email.as_ref())
            .or_else(|| state.dataset.students.first())
            .map(|s| User {
                id: s.id.clone(),
                name: s.name.clone(),
                email: s.email.clone(),
                role: UserRole::Student,
            }),
        "professor" => state
            .dataset
            .professors
            .iter()
            .find(|p| Some(&p.email) == email.as_ref())
            .or_else(|| state.dataset.professors.first())
            .map(|p| User {
                id: p.id.clone(),
                name: p.name.clone(),
                email: p.email.clone(),
                role: UserRole::Professor,
            }),
        "admin" => Some(User {
            id: "admin1".to_string(),
            name: "Administrador Principal".to_string(),
            email: format!("admin@{}", seed::EMAIL_DOMAIN),
            role: UserRole::Admin,
        }),
        _ => {
            return bad_params(&req.id, "role must be student, professor or admin");
        }
    };

    match user {
        Some(user) => ok(&req.id, json!({ "user": user })),
        None => err(&req.id, "no_records", format!("no {role} records generated")),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "session.login" => Some(handle_login(state, req)),
        _ => None,
    }
}
