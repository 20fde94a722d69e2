use serde_json::json;

use crate::ipc::error::{bad_params, not_found, ok};
use crate::ipc::helpers::{enum_param, str_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{Course, UserRole};
use crate::views;

fn handle_kardex(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = str_param(&req.params, "studentId") else {
        return bad_params(&req.id, "missing studentId");
    };
    let AppState { dataset, rng } = state;
    let Some(student) = dataset.students.iter().find(|s| s.id == student_id) else {
        return not_found(&req.id, format!("unknown student {student_id}"));
    };
    let grades = views::kardex_for_student(dataset, student, rng);
    ok(&req.id, json!({ "grades": grades }))
}

fn handle_weekly_schedule(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = str_param(&req.params, "studentId") else {
        return bad_params(&req.id, "missing studentId");
    };
    let AppState { dataset, rng } = state;
    let Some(student) = dataset.students.iter().find(|s| s.id == student_id) else {
        return not_found(&req.id, format!("unknown student {student_id}"));
    };
    let courses: Vec<Course> = dataset
        .courses
        .iter()
        .filter(|c| {
            c.career_id == student.career_id && c.term == student.term && c.group == student.group
        })
        .cloned()
        .collect();
    let schedule = views::weekly_schedule(&courses, rng);
    ok(&req.id, json!({ "schedule": schedule }))
}

fn handle_notifications(req: &Request) -> serde_json::Value {
    let Some(role) = enum_param::<UserRole>(&req.params, "role") else {
        return bad_params(&req.id, "missing or invalid role");
    };
    ok(
        &req.id,
        json!({ "notifications": views::notifications_for_role(role) }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.kardex" => Some(handle_kardex(state, req)),
        "schedule.weekly" => Some(handle_weekly_schedule(state, req)),
        "notifications.list" => Some(handle_notifications(req)),
        _ => None,
    }
}
