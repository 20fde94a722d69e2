use serde::{Deserialize, Serialize};

/// An academic degree program. `total_students` and `total_groups` are
/// derived totals, valid only after the aggregation pass has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub name: String,
    pub code: String,
    pub level: CareerLevel,
    pub coordinator: String,
    pub total_students: u32,
    pub total_groups: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerLevel {
    #[serde(rename = "Ingeniería")]
    Ingenieria,
    #[serde(rename = "Licenciatura")]
    Licenciatura,
    #[serde(rename = "Maestría")]
    Maestria,
}

/// A course blueprint belonging to one career and one term. Not yet tied to
/// a professor or room; that happens when a course is materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumSubject {
    pub id: String,
    pub name: String,
    pub code: String,
    pub credits: u32,
    pub term: u8,
    pub career_id: String,
}

/// The email is derived from the realized name parts when the record is
/// created and is never recomputed; renaming a professor leaves it alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub status: ProfessorStatus,
    pub contract_type: ContractType,
    pub courses_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessorStatus {
    Active,
    Sabbatical,
    /// Never produced by generation; reached only when the UI retires a
    /// professor.
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    /// Part-time (profesor de asignatura).
    PA,
    /// Full-time (profesor de tiempo completo).
    PTC,
}

/// `program_name` is a snapshot of the owning career's name taken at
/// creation time; later career renames do not propagate into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub enrollment_id: String,
    pub name: String,
    pub email: String,
    pub career_id: String,
    pub program_name: String,
    pub term: u8,
    pub group: String,
    pub average: f64,
    pub status: StudentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Regular,
    Irregular,
    /// Withdrawn. Never produced by generation; reached only when the UI
    /// drops a student.
    Baja,
}

/// A scheduled, staffed instantiation of a curriculum subject for one group.
/// `professor_name` and `students_count` are snapshots taken when the course
/// is created (or when a professor is reassigned); they are not live views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub career_id: String,
    pub professor_id: String,
    pub professor_name: String,
    pub group: String,
    pub credits: u32,
    pub classroom: String,
    pub term: u8,
    pub capacity: u32,
    pub status: CourseStatus,
    pub students_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Professor,
    Admin,
}

/// The fabricated session user handed back by `session.login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// One row of a student's transcript (kardex).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryGrade {
    pub id: String,
    pub subject_name: String,
    pub score: u32,
    pub term: u8,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    pub credits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    Ordinario,
    Extraordinario,
}

/// One cell of the weekly timetable grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub details: String,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    pub day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Class,
    Break,
    Office,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Danger,
    Warning,
    Success,
    Info,
}
