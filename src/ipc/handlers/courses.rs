use serde_json::json;
use uuid::Uuid;

use crate::ipc::error::{bad_params, not_found, ok};
use crate::ipc::helpers::{enum_param, str_param, term_param, u32_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{Course, CourseStatus};

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    let career_id = str_param(&req.params, "careerId");
    let term = term_param(&req.params, "term");
    let group = str_param(&req.params, "group");
    let professor_id = str_param(&req.params, "professorId");

    let courses: Vec<&Course> = state
        .dataset
        .courses
        .iter()
        .filter(|c| career_id.as_deref().map_or(true, |v| c.career_id == v))
        .filter(|c| term.map_or(true, |v| c.term == v))
        .filter(|c| group.as_deref().map_or(true, |v| c.group == v))
        .filter(|c| professor_id.as_deref().map_or(true, |v| c.professor_id == v))
        .collect();
    ok(&req.id, json!({ "courses": courses }))
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
    let Some(group) = str_param(&req.params, "group") else {
        return bad_params(&req.id, "missing group");
    };
    let Some(credits) = u32_param(&req.params, "credits") else {
        return bad_params(&req.id, "missing credits");
    };
    let Some(professor_id) = str_param(&req.params, "professorId") else {
        return bad_params(&req.id, "missing professorId");
    };
    let classroom = str_param(&req.params, "classroom").unwrap_or_else(|| "Por asignar".to_string());
    let capacity = u32_param(&req.params, "capacity").unwrap_or(35);

    if !state.dataset.careers.iter().any(|c| c.id == career_id) {
        return not_found(&req.id, format!("unknown career {career_id}"));
    }
    // Professor name is snapshotted at assignment time.
    let Some(professor_name) = state
        .dataset
        .professors
        .iter()
        .find(|p| p.id == professor_id)
        .map(|p| p.name.clone())
    else {
        return not_found(&req.id, format!("unknown professor {professor_id}"));
    };
    // As is the headcount of the group the course is opened for.
    let students_count = state
        .dataset
        .students
        .iter()
        .filter(|s| s.career_id == career_id && s.term == term && s.group == group)
        .count() as u32;

    let course = Course {
        id: format!("C-{}", Uuid::new_v4()),
        name,
        career_id,
        professor_id,
        professor_name,
        group,
        credits,
        classroom,
        term,
        capacity,
        status: CourseStatus::Active,
        students_count,
    };
    state.dataset.courses.push(course.clone());
    ok(&req.id, json!({ "course": course }))
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let name = str_param(&req.params, "name");
    let classroom = str_param(&req.params, "classroom");
    let capacity = u32_param(&req.params, "capacity");
    let status: Option<CourseStatus> = enum_param(&req.params, "status");
    let professor_id = str_param(&req.params, "professorId");

    // Reassigning a professor takes a fresh name snapshot; everything else
    // leaves the existing snapshots alone.
    let professor = match professor_id {
        Some(pid) => {
            let Some(p) = state.dataset.professors.iter().find(|p| p.id == pid) else {
                return not_found(&req.id, format!("unknown professor {pid}"));
            };
            Some((p.id.clone(), p.name.clone()))
        }
        None => None,
    };

    let Some(course) = state.dataset.courses.iter_mut().find(|c| c.id == id) else {
        return not_found(&req.id, format!("unknown course {id}"));
    };
    if let Some(v) = name {
        course.name = v;
    }
    if let Some(v) = classroom {
        course.classroom = v;
    }
    if let Some(v) = capacity {
        course.capacity = v;
    }
    if let Some(v) = status {
        course.status = v;
    }
    if let Some((pid, pname)) = professor {
        course.professor_id = pid;
        course.professor_name = pname;
    }
    ok(&req.id, json!({ "course": course.clone() }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = str_param(&req.params, "id") else {
        return bad_params(&req.id, "missing id");
    };
    let before = state.dataset.courses.len();
    state.dataset.courses.retain(|c| c.id != id);
    if state.dataset.courses.len() == before {
        return not_found(&req.id, format!("unknown course {id}"));
    }
    ok(&req.id, json!({ "deleted": id }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "courses.list" => Some(handle_list(state, req)),
        "courses.create" => Some(handle_create(state, req)),
        "courses.update" => Some(handle_update(state, req)),
        "courses.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
