use assert_cmd::Command;
use predicates::prelude::*;

const DUMP: &str = r#"[
    {
        "name": "java.lang.Object",
        "modifiers": 1
    },
    {
        "name": "com.example.FileStream",
        "modifiers": 1,
        "superclass": "java.lang.Object",
        "interfaces": ["java.io.Closeable"],
        "methods": [
            {"name": "close", "modifiers": 1, "parameters": [], "returns": "void"},
            {"name": "read", "modifiers": 1, "parameters": ["byte[]"], "returns": "int"}
        ]
    },
    {
        "name": "com.example.Opaque",
        "modifiers": 4097,
        "superclass": "java.lang.Object",
        "interfaces": ["java.io.Closeable"],
        "methods": [
            {"name": "close", "modifiers": 1, "parameters": [], "returns": "void"}
        ]
    }
]"#;

fn write_dump(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("dump.json");
    std::fs::write(&path, DUMP).unwrap();
    path
}

#[test]
fn matches_are_rendered_as_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir);

    Command::cargo_bin("jsift")
        .unwrap()
        .arg("* : java.io.Closeable { close(); }")
        .arg("--metadata")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("com.example.FileStream {"))
        .stdout(predicate::str::contains("    public void close()"))
        // Synthetic candidates are skipped before matching.
        .stdout(predicate::str::contains("com.example.Opaque").not());
}

#[test]
fn statistics_follow_the_matches() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir);

    Command::cargo_bin("jsift")
        .unwrap()
        .arg("* : * { read(byte[]): int; }")
        .arg("--metadata")
        .arg(&dump)
        .arg("--show-statistics")
        .assert()
        .success()
        .stdout(predicate::str::contains("classes count: 1"))
        .stdout(predicate::str::contains("methods count: 1"));
}

#[test]
fn json_mode_emits_one_object_per_match() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir);

    let assert = Command::cargo_bin("jsift")
        .unwrap()
        .arg("* : java.io.Closeable { close(); }")
        .arg("--metadata")
        .arg(&dump)
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(parsed["class"], "com.example.FileStream");
    assert_eq!(parsed["methods"][0], "public void close()");
}

#[test]
fn bad_template_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir);

    Command::cargo_bin("jsift")
        .unwrap()
        .arg("* : { }")
        .arg("--metadata")
        .arg(&dump)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to compile template"));
}

#[test]
fn missing_metadata_source_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_dump(&dir);

    Command::cargo_bin("jsift")
        .unwrap()
        .arg("* : * { }")
        .arg("--metadata")
        .arg(&dump)
        .arg("--metadata")
        .arg(dir.path().join("absent.json"))
        .arg("--show-statistics")
        .assert()
        .success()
        .stdout(predicate::str::contains("absent.json"));
}
