use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

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

#[test]
fn create_snapshots_headcount_and_professor_name() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(8);

    let professors = request_ok(&mut stdin, &mut reader, "1", "professors.list", json!({}))
        .get("professors")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("professors");
    let professor = &professors[0];
    let pid = professor.get("id").and_then(|v| v.as_str()).expect("id");
    let pname = professor.get("name").and_then(|v| v.as_str()).expect("name");

    let created = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "courses.create",
        json!({
            "name": "Tópicos Selectos de Software",
            "careerId": "ISO",
            "term": 7,
            "group": "B",
            "credits": 6,
            "professorId": pid,
            "classroom": "Aula 112"
        }),
    );
    let course = created.get("course").cloned().expect("course");
    // The ISO term-7 B group was generated with 25 students.
    assert_eq!(course.get("studentsCount").and_then(|v| v.as_u64()), Some(25));
    assert_eq!(
        course.get("professorName").and_then(|v| v.as_str()),
        Some(pname)
    );
    assert_eq!(course.get("capacity").and_then(|v| v.as_u64()), Some(35));
    assert_eq!(course.get("status").and_then(|v| v.as_str()), Some("active"));

    // A course for a group nobody generated snapshots a zero headcount.
    let empty_group = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "courses.create",
        json!({
            "name": "Seminario Optativo",
            "careerId": "ISO",
            "term": 2,
            "group": "C",
            "credits": 4,
            "professorId": pid
        }),
    );
    assert_eq!(
        empty_group
            .get("course")
            .and_then(|c| c.get("studentsCount"))
            .and_then(|v| v.as_u64()),
        Some(0)
    );

    let unknown_professor = request(
        &mut stdin,
        &mut reader,
        "4",
        "courses.create",
        json!({
            "name": "Materia Imposible",
            "careerId": "ISO",
            "term": 1,
            "group": "A",
            "credits": 4,
            "professorId": "P-999"
        }),
    );
    assert_eq!(
        unknown_professor.get("ok").and_then(|v| v.as_bool()),
        Some(false)
    );
    assert_eq!(
        unknown_professor
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_found")
    );
}

#[test]
fn reassigning_a_professor_takes_a_fresh_snapshot() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(8);

    let courses = request_ok(&mut stdin, &mut reader, "1", "courses.list", json!({}))
        .get("courses")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("courses");
    let course = &courses[0];
    let cid = course.get("id").and_then(|v| v.as_str()).expect("id");
    let old_pid = course
        .get("professorId")
        .and_then(|v| v.as_str())
        .expect("professorId");

    // Pick a different professor to take over.
    let professors = request_ok(&mut stdin, &mut reader, "2", "professors.list", json!({}))
        .get("professors")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("professors");
    let replacement = professors
        .iter()
        .find(|p| p.get("id").and_then(|v| v.as_str()) != Some(old_pid))
        .expect("replacement professor");
    let new_pid = replacement.get("id").and_then(|v| v.as_str()).expect("id");
    let new_pname = replacement
        .get("name")
        .and_then(|v| v.as_str())
        .expect("name");

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "courses.update",
        json!({ "id": cid, "professorId": new_pid, "status": "closed" }),
    );
    let course = updated.get("course").cloned().expect("course");
    assert_eq!(course.get("professorId").and_then(|v| v.as_str()), Some(new_pid));
    assert_eq!(
        course.get("professorName").and_then(|v| v.as_str()),
        Some(new_pname)
    );
    assert_eq!(course.get("status").and_then(|v| v.as_str()), Some("closed"));
}

#[test]
fn delete_removes_the_course() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(8);

    let courses = request_ok(&mut stdin, &mut reader, "1", "courses.list", json!({}))
        .get("courses")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("courses");
    let total = courses.len();
    let cid = courses[0].get("id").and_then(|v| v.as_str()).expect("id");

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "courses.delete",
        json!({ "id": cid }),
    );

    let after = request_ok(&mut stdin, &mut reader, "3", "courses.list", json!({}))
        .get("courses")
        .and_then(|v| v.as_array())
        .cloned()
        .expect("courses");
    assert_eq!(after.len(), total - 1);
    assert!(!after
        .iter()
        .any(|c| c.get("id").and_then(|v| v.as_str()) == Some(cid)));

    let again = request(
        &mut stdin,
        &mut reader,
        "4",
        "courses.delete",
        json!({ "id": cid }),
    );
    assert_eq!(again.get("ok").and_then(|v| v.as_bool()), Some(false));
}
