use serde_json::json;
use uuid::Uuid;

use crate::ipc::error::{bad_params, not_found, ok};
use crate::ipc::helpers::{str_param, term_param, u32_param};
use crate::ipc::types::{AppState, Request};
use crate::model::CurriculumSubject;

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    let career_id = str_param(&req.params, "careerId");
    let term = term_param(&req.params, "term");

    let subjects: Vec<&CurriculumSubject> = state
        .dataset
        .curriculum
        .iter()
        .filter(|s| career_id.as_deref().map_or(true, |c| s.career_id == c))
        .filter(|s| term.map_or(true, |t| s.term == t))
        .collect();
    ok(&req.id, json!({ "subjects": subjects }))
}

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(name) = str_param(&req.params, "name") else {
        return bad_params(&req.id, "missing name");
    };
    let Some(career_id) = str_param(&req.params, "careerId") else {
        return bad_params(&req.id, "missing careerId");
    };
    let Some(term) = term_param(&req.params, "term") else {
        return bad_params(&req.id, "missing term");
    };
    let Some(credits) = u32_param(&req.params, "credits") else {
        return bad_params(&req.id, "missing credits");
    };
    if !(1..=9).contains(&term) {
        return bad_params(&req.id, "term must be between 1 and 9");
    }
    if !state.dataset.careers.iter().any(|c| c.id == career_id) {
        return not_found(&req.id, format!("unknown career {career_id}"));
    }

    let position = state
        .dataset
        .curriculum
        .iter()
        .filter(|s| s.career_id == career_id)
        .count();
    let subject = CurriculumSubject {
        id: format!("SUB-{career_id}-{}", Uuid::new_v4()),
        name,
        code: format!("{career_id}-{term}0{}", position % 10),
        credits,
        term,
        career_id,
    };
    state.dataset.curriculum.push(subject.clone());
    ok(&req.id, json!({ "subject": subject }))
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let name = str_param(&req.params, "name");
    let credits = u32_param(&req.params, "credits");
    let term = term_param(&req.params, "term");
    if let Some(t) = term {
        if !(1..=9).contains(&t) {
            return bad_params(&req.id, "term must be between 1 and 9");
        }
    }

    let Some(subject) = state.dataset.curriculum.iter_mut().find(|s| s.id == id) else {
        return not_found(&req.id, format!("unknown subject {id}"));
    };
    if let Some(v) = name {
        subject.name = v;
    }
    if let Some(v) = credits {
        subject.credits = v;
    }
    if let Some(v) = term {
        subject.term = v;
    }
    ok(&req.id, json!({ "subject": subject.clone() }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let before = state.dataset.curriculum.len();
    state.dataset.curriculum.retain(|s| s.id != id);
    if state.dataset.curriculum.len() == before {
        return not_found(&req.id, format!("unknown subject {id}"));
    }
    ok(&req.id, json!({ "deleted": id }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "curriculum.list" => Some(handle_list(state, req)),
        "curriculum.create" => Some(handle_create(state, req)),
        "curriculum.update" => Some(handle_update(state, req)),
        "curriculum.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
