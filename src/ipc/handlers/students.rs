use serde_json::json;

use crate::ipc::error::{bad_params, err, not_found, ok};
use crate::ipc::helpers::{enum_param, f64_param, str_param, term_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{StudentRecord, StudentStatus};
use crate::seed;

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    let career_id = str_param(&req.params, "careerId");
    let term = term_param(&req.params, "term");
    let group = str_param(&req.params, "group");
    let status: Option<StudentStatus> = enum_param(&req.params, "status");
    let search = str_param(&req.params, "search").map(|s| s.to_lowercase());

    let students: Vec<&StudentRecord> = state
        .dataset
        .students
        .iter()
        .filter(|s| career_id.as_deref().map_or(true, |c| s.career_id == c))
        .filter(|s| term.map_or(true, |t| s.term == t))
        .filter(|s| group.as_deref().map_or(true, |g| s.group == g))
        .filter(|s| status.map_or(true, |st| s.status == st))
        .filter(|s| {
            search.as_deref().map_or(true, |q| {
                s.name.to_lowercase().contains(q) || s.enrollment_id.contains(q)
            })
        })
        .collect();
    ok(&req.id, json!({ "students": students }))
}

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(enrollment_id) = str_param(&req.params, "enrollmentId") else {
        return bad_params(&req.id, "missing enrollmentId");
    };
    let Some(name) = str_param(&req.params, "name") else {
        return bad_params(&req.id, "missing name");
    };
    let Some(career_id) = str_param(&req.params, "careerId") else {
        return bad_params(&req.id, "missing careerId");
    };
    let Some(term) = term_param(&req.params, "term") else {
        return bad_params(&req.id, "missing term");
    };
    let Some(group) = str_param(&req.params, "group") else {
        return bad_params(&req.id, "missing group");
    };
    let average = f64_param(&req.params, "average").unwrap_or(0.0);
    let status = enum_param(&req.params, "status").unwrap_or(StudentStatus::Regular);

    // Program name is snapshotted from the career at creation; an unknown
    // career is an explicit error, not an empty string.
    let Some(program_name) = state
        .dataset
        .careers
        .iter()
        .find(|c| c.id == career_id)
        .map(|c| c.name.clone())
    else {
        return not_found(&req.id, format!("unknown career {career_id}"));
    };
    if state
        .dataset
        .students
        .iter()
        .any(|s| s.enrollment_id == enrollment_id)
    {
        return err(
            &req.id,
            "duplicate_enrollment",
            format!("enrollment id {enrollment_id} already exists"),
        );
    }

    let student = StudentRecord {
        id: format!("s-{enrollment_id}"),
        email: format!("{enrollment_id}@{}", seed::EMAIL_DOMAIN),
        enrollment_id,
        name,
        career_id,
        program_name,
        term,
        group,
        average,
        status,
    };
    state.dataset.students.push(student.clone());
    ok(&req.id, json!({ "student": student }))
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let name = str_param(&req.params, "name");
    let term = term_param(&req.params, "term");
    let group = str_param(&req.params, "group");
    let average = f64_param(&req.params, "average");
    let status: Option<StudentStatus> = enum_param(&req.params, "status");

    let Some(student) = state.dataset.students.iter_mut().find(|s| s.id == id) else {
        return not_found(&req.id, format!("unknown student {id}"));
    };
    if let Some(v) = name {
        student.name = v;
    }
    if let Some(v) = term {
        student.term = v;
    }
    if let Some(v) = group {
        student.group = v;
    }
    if let Some(v) = average {
        student.average = v;
    }
    if let Some(v) = status {
        student.status = v;
    }
    ok(&req.id, json!({ "student": student.clone() }))
}

/// Students are dropped ("baja"), not removed, so their history stays
/// addressable.
fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let Some(student) = state.dataset.students.iter_mut().find(|s| s.id == id) else {
        return not_found(&req.id, format!("unknown student {id}"));
    };
    student.status = StudentStatus::Baja;
    ok(&req.id, json!({ "student": student.clone() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        "students.create" => Some(handle_create(state, req)),
        "students.update" => Some(handle_update(state, req)),
        "students.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
