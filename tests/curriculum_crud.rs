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

fn list_subjects(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    params: serde_json::Value,
) -> Vec<serde_json::Value> {
    request_ok(stdin, reader, id, "curriculum.list", params)
        .get("subjects")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

#[test]
fn list_filters_by_career_and_term() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(13);

    let all = list_subjects(&mut stdin, &mut reader, "1", json!({}));
    assert_eq!(all.len(), 136);

    let iso = list_subjects(&mut stdin, &mut reader, "2", json!({ "careerId": "ISO" }));
    assert_eq!(iso.len(), 34);

    let iso_term9 = list_subjects(
        &mut stdin,
        &mut reader,
        "3",
        json!({ "careerId": "ISO", "term": 9 }),
    );
    assert_eq!(iso_term9.len(), 2);
    assert!(iso_term9
        .iter()
        .any(|s| s.get("name").and_then(|v| v.as_str()) == Some("Estadía Profesional")));

    // Codes embed the career and term of the row.
    for subject in &iso {
        let code = subject.get("code").and_then(|v| v.as_str()).expect("code");
        assert!(code.starts_with("ISO-"));
    }
}

#[test]
fn create_update_delete_roundtrip() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(13);

    let created = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "curriculum.create",
        json!({
            "name": "Cómputo en la Nube",
            "careerId": "ISO",
            "term": 8,
            "credits": 6
        }),
    );
    let subject = created.get("subject").cloned().expect("subject");
    let sid = subject.get("id").and_then(|v| v.as_str()).expect("id");
    assert!(sid.starts_with("SUB-ISO-"));
    assert!(subject
        .get("code")
        .and_then(|v| v.as_str())
        .expect("code")
        .starts_with("ISO-80"));

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "curriculum.update",
        json!({ "id": sid, "credits": 8 }),
    );
    assert_eq!(
        updated
            .get("subject")
            .and_then(|s| s.get("credits"))
            .and_then(|v| v.as_u64()),
        Some(8)
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "curriculum.delete",
        json!({ "id": sid }),
    );
    let again = request(
        &mut stdin,
        &mut reader,
        "4",
        "curriculum.delete",
        json!({ "id": sid }),
    );
    assert_eq!(again.get("ok").and_then(|v| v.as_bool()), Some(false));
}

#[test]
fn create_validates_term_and_career() {
    let (_child, mut stdin, mut reader) = spawn_sidecar(13);

    let bad_term = request(
        &mut stdin,
        &mut reader,
        "1",
        "curriculum.create",
        json!({ "name": "Materia Fantasma", "careerId": "ISO", "term": 12, "credits": 4 }),
    );
    assert_eq!(
        bad_term
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("bad_params")
    );

    let bad_career = request(
        &mut stdin,
        &mut reader,
        "2",
        "curriculum.create",
        json!({ "name": "Materia Perdida", "careerId": "ZZZ", "term": 1, "credits": 4 }),
    );
    assert_eq!(
        bad_career
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_found")
    );
}
