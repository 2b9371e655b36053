use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const PAGE: &str = r#"{
    "url": "https://dev.example.com/_apis/wit/workItems/299/comments",
    "comments": [
        {
            "id": 5, "artifactId": "299", "text": "Ship it", "state": 0, "version": 1,
            "createdBy": {"displayName": "Ada"}, "createdDate": "2024-03-01T09:30:00Z",
            "modifiedBy": {"displayName": "Ada"}, "modifiedDate": "2024-03-01T09:30:00Z",
            "isDeleted": false, "parentId": null,
            "reactions": [{"commentId": 5, "type": 5, "count": 3, "isCurrentUserEngaged": true}]
        }
    ],
    "count": 1,
    "totalCount": 4,
    "continuationToken": "next/+1"
}"#;

fn comments(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("comments").unwrap();
    cmd.arg("--no-color")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn inspect_prints_thread_tree() {
    let dir = TempDir::new().unwrap();
    let page = write(&dir, "page.json", PAGE);

    comments(&dir)
        .arg("inspect")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 4 comments"))
        .stdout(predicate::str::contains("#5 [active] v1 Ada"))
        .stdout(predicate::str::contains("confused*x3"));
}

#[test]
fn inspect_json_keeps_numeric_enums() {
    let dir = TempDir::new().unwrap();
    let page = write(&dir, "page.json", PAGE);

    comments(&dir)
        .args(["inspect", "--format", "json"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": 5"#))
        .stdout(predicate::str::contains(r#""parentId": null"#));
}

#[test]
fn inspect_reports_unknown_enum() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.json", &PAGE.replace(r#""state": 0"#, r#""state": 7"#));

    comments(&dir)
        .arg("inspect")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown enum value"));
}

#[test]
fn check_flags_count_mismatch() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.json", &PAGE.replace(r#""count": 1"#, r#""count": 2"#));

    comments(&dir)
        .arg("check")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("count is 2 but the batch holds 1 comments"));
}

#[test]
fn check_passes_clean_page() {
    let dir = TempDir::new().unwrap();
    let page = write(&dir, "page.json", PAGE);

    comments(&dir)
        .arg("check")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("no violations"));
}

#[test]
fn query_follows_continuation_from_page() {
    let dir = TempDir::new().unwrap();
    let page = write(&dir, "page.json", PAGE);

    comments(&dir)
        .args(["query", "--expand", "all", "--top", "25", "--from-page"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$top=25&continuationToken=next%2F%2B1&$expand=-17&order=1",
        ));
}

#[test]
fn config_reset_then_show() {
    let dir = TempDir::new().unwrap();

    comments(&dir)
        .args(["config", "reset", "--force"])
        .assert()
        .success();
    assert!(Path::new(&dir.path().join("config.toml")).exists());

    comments(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[query]"));
}
