//! One-shot mock dataset bootstrap. Generation is a single linear pipeline:
//! seeds -> curriculum -> (professors, cohorts) -> courses -> aggregates.
//! Cohorts for a (term, group) must exist before the courses that copy their
//! headcount, and the aggregation pass runs only after every career has been
//! materialized, since professor assignment is global across careers.

use std::collections::HashSet;

use anyhow::{bail, ensure, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{
    Career, ContractType, Course, CourseStatus, CurriculumSubject, Professor, ProfessorStatus,
    StudentRecord, StudentStatus,
};
use crate::seed;

#[derive(Debug, Clone)]
pub struct GenConfig {
    pub professor_count: usize,
    /// Terms running in the current academic cycle; a deliberate subset of 1-9.
    pub active_terms: Vec<u8>,
    pub groups: Vec<String>,
    pub group_size: usize,
    /// Two-digit base used to back-date entry years from the term number.
    pub base_entry_year: u32,
    pub sequence_start: u32,
    pub course_capacity: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            professor_count: 40,
            active_terms: vec![1, 4, 7],
            groups: vec!["A".to_string(), "B".to_string()],
            group_size: 25,
            base_entry_year: 25,
            sequence_start: 1000,
            course_capacity: 35,
        }
    }
}

/// The in-memory store handed to the IPC layer once generation completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub careers: Vec<Career>,
    pub curriculum: Vec<CurriculumSubject>,
    pub professors: Vec<Professor>,
    pub students: Vec<StudentRecord>,
    pub courses: Vec<Course>,
}

pub fn generate(cfg: &GenConfig, seed: u64) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(cfg, &mut rng)
}

pub fn generate_with_rng(cfg: &GenConfig, rng: &mut StdRng) -> Result<Dataset> {
    ensure!(
        !seed::GIVEN_NAMES.is_empty() && !seed::SURNAMES.is_empty(),
        "name pools must not be empty"
    );
    ensure!(
        !seed::DEPARTMENTS.is_empty(),
        "department pool must not be empty"
    );
    ensure!(cfg.professor_count > 0, "professor pool size must be > 0");

    let careers = seed_careers();
    let curriculum = build_curriculum();
    let professors = generate_professors(cfg.professor_count, rng);

    let mut students = Vec::new();
    let mut courses = Vec::new();
    // One counter across every career/term/group keeps enrollment ids
    // globally unique.
    let mut sequence = cfg.sequence_start;
    for career in &careers {
        let (batch_students, batch_courses) = materialize_career(
            cfg,
            &careers,
            &career.id,
            &curriculum,
            &professors,
            &mut sequence,
            rng,
        )?;
        students.extend(batch_students);
        courses.extend(batch_courses);
    }

    let mut dataset = Dataset {
        careers,
        curriculum,
        professors,
        students,
        courses,
    };
    aggregate(&mut dataset);
    Ok(dataset)
}

pub fn seed_careers() -> Vec<Career> {
    seed::CAREERS
        .iter()
        .map(|c| Career {
            id: c.id.to_string(),
            name: c.name.to_string(),
            code: c.id.to_string(),
            level: c.level,
            coordinator: c.coordinator.to_string(),
            total_students: 0,
            total_groups: 0,
            color: c.color.to_string(),
        })
        .collect()
}

/// Expands the raw curriculum catalogue into keyed subject records. The
/// generated code embeds the row's position within the full list.
pub fn build_curriculum() -> Vec<CurriculumSubject> {
    seed::RAW_CURRICULUM
        .iter()
        .enumerate()
        .map(|(idx, row)| CurriculumSubject {
            id: format!("SUB-{}-{}", row.career, idx),
            name: row.name.to_string(),
            code: format!("{}-{}0{}", row.career, row.term, idx % 10),
            credits: row.credits,
            term: row.term,
            career_id: row.career.to_string(),
        })
        .collect()
}

pub fn generate_professors(count: usize, rng: &mut StdRng) -> Vec<Professor> {
    (0..count)
        .map(|i| {
            let given = pick(rng, seed::GIVEN_NAMES);
            let paternal = pick(rng, seed::SURNAMES);
            let maternal = pick(rng, seed::SURNAMES);
            // The email is fixed at creation from the realized name parts;
            // later renames must not desync it.
            let email = format!(
                "{}.{}@{}",
                given.to_lowercase(),
                paternal.to_lowercase(),
                seed::EMAIL_DOMAIN
            );
            Professor {
                id: format!("P-{}", 100 + i),
                employee_id: format!("DOC-{}", 100 + i),
                name: format!("Mtro/a. {given} {paternal} {maternal}"),
                email,
                department: pick(rng, seed::DEPARTMENTS).to_string(),
                status: if rng.gen_bool(0.1) {
                    ProfessorStatus::Sabbatical
                } else {
                    ProfessorStatus::Active
                },
                contract_type: if rng.gen_bool(0.4) {
                    ContractType::PA
                } else {
                    ContractType::PTC
                },
                courses_count: 0,
            }
        })
        .collect()
}

/// Generates one batch of students for a (career, term, group). The caller
/// threads `sequence` through every call so enrollment ids stay globally
/// unique. Unknown career ids abort generation rather than producing records
/// with an empty program name.
pub fn generate_cohort(
    cfg: &GenConfig,
    careers: &[Career],
    career_id: &str,
    term: u8,
    group: &str,
    count: usize,
    sequence: &mut u32,
    rng: &mut StdRng,
) -> Result<Vec<StudentRecord>> {
    let Some(career) = careers.iter().find(|c| c.id == career_id) else {
        bail!("cohort requested for unknown career {career_id:?}");
    };
    // Later terms imply earlier hypothetical entry years.
    let entry_year = cfg.base_entry_year - u32::from(term / 3);

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let seq = *sequence;
        *sequence += 1;
        let enrollment_id = format!("{entry_year}00{seq:04}");
        let average = (rng.gen_range(7.0..=9.5) * 10.0_f64).round() / 10.0;
        out.push(StudentRecord {
            id: format!("s-{enrollment_id}"),
            enrollment_id: enrollment_id.clone(),
            name: format!(
                "{} {} {}",
                pick(rng, seed::GIVEN_NAMES),
                pick(rng, seed::SURNAMES),
                pick(rng, seed::SURNAMES)
            ),
            email: format!("{enrollment_id}@{}", seed::EMAIL_DOMAIN),
            career_id: career_id.to_string(),
            program_name: career.name.clone(),
            term,
            group: group.to_string(),
            average,
            status: if rng.gen_bool(0.1) {
                StudentStatus::Irregular
            } else {
                StudentStatus::Regular
            },
        });
    }
    Ok(out)
}

/// Materializes one career: for every (active term, group) combination that
/// has curriculum subjects, first a cohort, then one course per subject with
/// the cohort's headcount copied onto it.
pub fn materialize_career(
    cfg: &GenConfig,
    careers: &[Career],
    career_id: &str,
    curriculum: &[CurriculumSubject],
    professors: &[Professor],
    sequence: &mut u32,
    rng: &mut StdRng,
) -> Result<(Vec<StudentRecord>, Vec<Course>)> {
    ensure!(!professors.is_empty(), "professor pool is empty");

    let mut students = Vec::new();
    let mut courses = Vec::new();
    for &term in &cfg.active_terms {
        let term_subjects: Vec<&CurriculumSubject> = curriculum
            .iter()
            .filter(|s| s.career_id == career_id && s.term == term)
            .collect();
        // An active term with no scheduled subjects contributes no groups.
        if term_subjects.is_empty() {
            continue;
        }
        for group in &cfg.groups {
            let cohort = generate_cohort(
                cfg, careers, career_id, term, group, cfg.group_size, sequence, rng,
            )?;
            let headcount = cohort.len() as u32;
            students.extend(cohort);

            for subject in &term_subjects {
                // No department/career affinity: any professor can be
                // assigned any course.
                let professor = pick(rng, professors);
                courses.push(Course {
                    id: format!("C-{career_id}-{term}{group}-{}", subject.id),
                    name: subject.name.clone(),
                    career_id: career_id.to_string(),
                    professor_id: professor.id.clone(),
                    professor_name: professor.name.clone(),
                    group: group.clone(),
                    credits: subject.credits,
                    classroom: format!("Aula {}", rng.gen_range(100..120)),
                    term,
                    capacity: cfg.course_capacity,
                    status: CourseStatus::Active,
                    students_count: headcount,
                });
            }
        }
    }
    Ok((students, courses))
}

/// Recomputes every derived total from the finished collections. Idempotent:
/// running it again on an unchanged dataset changes nothing.
pub fn aggregate(dataset: &mut Dataset) {
    let students = &dataset.students;
    let courses = &dataset.courses;

    for career in &mut dataset.careers {
        career.total_students = students
            .iter()
            .filter(|s| s.career_id == career.id)
            .count() as u32;
        career.total_groups = courses
            .iter()
            .filter(|c| c.career_id == career.id)
            .map(|c| (c.term, c.group.as_str()))
            .collect::<HashSet<_>>()
            .len() as u32;
    }

    for professor in &mut dataset.professors {
        professor.courses_count = courses
            .iter()
            .filter(|c| c.professor_id == professor.id)
            .count() as u32;
    }
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> &'a T {
    // Pools are validated non-empty before generation starts.
    pool.choose(rng).expect("empty pool")
}
