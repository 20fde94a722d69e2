use std::collections::HashSet;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde_json::json;

fn spawn_sidecar(seed: u64) -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_portald");
    let mut child = Command::new(exe)
        .env("PORTALD_SEED", seed.to_string())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn portald");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn list(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    key: &str,
) -> Vec<serde_json::Value> {
    request_ok(stdin, reader, id, method, json!({}))
        .get(key)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

#[test]
fn generated_collections_are_cross_referentially_consistent() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(99);

    let careers = list(&mut stdin, &mut reader, "1", "careers.list", "careers");
    let professors = list(&mut stdin, &mut reader, "2", "professors.list", "professors");
    let students = list(&mut stdin, &mut reader, "3", "students.list", "students");
    let courses = list(&mut stdin, &mut reader, "4", "courses.list", "courses");

    assert_eq!(careers.len(), 4);
    assert_eq!(professors.len(), 40);
    assert_eq!(students.len(), 600);
    assert_eq!(courses.len(), 96);

    let professor_ids: HashSet<&str> = professors
        .iter()
        .filter_map(|p| p.get("id").and_then(|v| v.as_str()))
        .collect();

    for course in &courses {
        let pid = course
            .get("professorId")
            .and_then(|v| v.as_str())
            .expect("professorId");
        assert!(professor_ids.contains(pid), "dangling professor {}", pid);

        let matching = students
            .iter()
            .filter(|s| {
                s.get("careerId") == course.get("careerId")
                    && s.get("term") == course.get("term")
                    && s.get("group") == course.get("group")
            })
            .count() as u64;
        assert_eq!(
            course.get("studentsCount").and_then(|v| v.as_u64()),
            Some(matching),
            "course {:?}",
            course.get("id")
        );
    }

    for career in &careers {
        let cid = career.get("id").and_then(|v| v.as_str()).expect("career id");
        let total = students
            .iter()
            .filter(|s| s.get("careerId").and_then(|v| v.as_str()) == Some(cid))
            .count() as u64;
        assert_eq!(
            career.get("totalStudents").and_then(|v| v.as_u64()),
            Some(total)
        );

        let groups: HashSet<(u64, &str)> = courses
            .iter()
            .filter(|c| c.get("careerId").and_then(|v| v.as_str()) == Some(cid))
            .map(|c| {
                (
                    c.get("term").and_then(|v| v.as_u64()).expect("term"),
                    c.get("group").and_then(|v| v.as_str()).expect("group"),
                )
            })
            .collect();
        assert_eq!(
            career.get("totalGroups").and_then(|v| v.as_u64()),
            Some(groups.len() as u64)
        );
    }

    for professor in &professors {
        let pid = professor.get("id").and_then(|v| v.as_str()).expect("id");
        let count = courses
            .iter()
            .filter(|c| c.get("professorId").and_then(|v| v.as_str()) == Some(pid))
            .count() as u64;
        assert_eq!(
            professor.get("coursesCount").and_then(|v| v.as_u64()),
            Some(count)
        );
    }

    let enrollments: HashSet<&str> = students
        .iter()
        .filter_map(|s| s.get("enrollmentId").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(enrollments.len(), students.len());
}

#[test]
fn same_seed_reproduces_the_same_wire_dataset() {
    let (_a, mut stdin_a, mut reader_a) = spawn_sidecar(5);
    let (_b, mut stdin_b, mut reader_b) = spawn_sidecar(5);

    for method in [
        "careers.list",
        "curriculum.list",
        "professors.list",
        "students.list",
        "courses.list",
    ] {
        let a = request_ok(&mut stdin_a, &mut reader_a, "1", method, json!({}));
        let b = request_ok(&mut stdin_b, &mut reader_b, "1", method, json!({}));
        assert_eq!(a, b, "{} differs across identically seeded runs", method);
    }
}
