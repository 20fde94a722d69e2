//! Per-user view datasets derived from the generated collections: transcript
//! (kardex) rows, the weekly timetable grid and the role notification feeds.

use rand::rngs::StdRng;
use rand::Rng;

use crate::gen::Dataset;
use crate::model::{
    Course, ExamType, HistoryGrade, NotificationItem, ScheduleItem, SlotType, StudentRecord,
    UserRole,
};
use crate::seed;

const KARDEX_MAX_ROWS: usize = 15;

/// 50-minute slots of a teaching day; the third row is the fixed break.
const DAY_SLOTS: &[(&str, &str, bool)] = &[
    ("07:00", "07:50", false),
    ("07:50", "08:40", false),
    ("08:40", "09:30", true),
    ("09:30", "10:20", false),
    ("10:20", "11:10", false),
    ("11:10", "12:00", false),
    ("12:00", "12:50", false),
    ("12:50", "13:40", false),
    ("13:40", "14:30", false),
];

/// Grades for the terms the student has already completed, capped at
/// fifteen rows and sorted by term. A first-term student has no history yet.
pub fn kardex_for_student(
    dataset: &Dataset,
    student: &StudentRecord,
    rng: &mut StdRng,
) -> Vec<HistoryGrade> {
    let mut grades: Vec<HistoryGrade> = dataset
        .curriculum
        .iter()
        .filter(|s| s.career_id == student.career_id && s.term < student.term)
        .take(KARDEX_MAX_ROWS)
        .enumerate()
        .map(|(i, subject)| HistoryGrade {
            id: format!("h-{i}"),
            subject_name: subject.name.clone(),
            score: rng.gen_range(7..=10),
            term: subject.term,
            exam_type: if rng.gen_bool(0.1) {
                ExamType::Extraordinario
            } else {
                ExamType::Ordinario
            },
            credits: subject.credits,
        })
        .collect();
    grades.sort_by_key(|g| g.term);
    grades
}

/// Expands a course list into a Monday-Friday grid. Class slots are filled
/// at roughly 70% occupancy, cycling through the courses; the break row is
/// always present.
pub fn weekly_schedule(courses: &[Course], rng: &mut StdRng) -> Vec<ScheduleItem> {
    let mut items = Vec::new();
    for day in 1u8..=5 {
        for (idx, &(start, end, is_break)) in DAY_SLOTS.iter().enumerate() {
            if is_break {
                items.push(ScheduleItem {
                    id: format!("break-{day}-{idx}"),
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                    subject: "Receso".to_string(),
                    details: "Cafetería".to_string(),
                    slot_type: SlotType::Break,
                    day,
                });
            } else if !courses.is_empty() && rng.gen_bool(0.7) {
                let course = &courses[idx % courses.len()];
                items.push(ScheduleItem {
                    id: format!("sch-{day}-{idx}"),
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                    subject: course.name.clone(),
                    details: course.classroom.clone(),
                    slot_type: SlotType::Class,
                    day,
                });
            }
        }
    }
    items
}

pub fn notifications_for_role(role: UserRole) -> Vec<NotificationItem> {
    let seeds: &[seed::NotificationSeed] = match role {
        UserRole::Student => seed::STUDENT_NOTIFICATIONS,
        UserRole::Professor => seed::PROFESSOR_NOTIFICATIONS,
        UserRole::Admin => &[],
    };
    seeds
        .iter()
        .enumerate()
        .map(|(i, n)| NotificationItem {
            id: (i + 1).to_string(),
            kind: n.kind,
            title: n.title.to_string(),
            message: n.message.to_string(),
            date: n.date.map(str::to_string),
        })
        .collect()
}
