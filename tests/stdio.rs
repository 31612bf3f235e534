// Oblique Gate - Binary Tests
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// Drives the built binary over stdio.

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::cargo_bin("oblique-gate").unwrap()
}

const SESSION: &str = concat!(
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#, "\n",
    r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#, "\n",
    r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"start_oblique_thinking","arguments":{}}}"#, "\n",
    r#"{"jsonrpc":"2.0","id":3,"method":"prompts/list"}"#, "\n",
    r#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#, "\n",
);

fn replies(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn tool_text(mode: Option<&str>) -> String {
    let mut c = cmd();
    if let Some(m) = mode {
        c.arg(m);
    }
    let out = c.write_stdin(SESSION).assert().success().get_output().stdout.clone();
    let replies = replies(&out);
    assert_eq!(replies.len(), 4);
    replies[1]["result"]["structuredContent"]["result"].as_str().unwrap().to_string()
}

#[test]
fn invalid_mode_exits_before_serving() {
    cmd()
        .arg("3")
        .write_stdin(SESSION)
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(contains("invalid value '3'"));
}

#[test]
fn extra_positional_is_rejected() {
    cmd().args(["1", "2"]).write_stdin("").assert().failure();
}

#[test]
fn default_mode_shows_label_and_card() {
    let text = tool_text(None);
    assert!(text.starts_with("Now "));
    let (_, card) = text.split_once("\n<thinking>\n").unwrap();
    assert!(!card.is_empty());
}

#[test]
fn mode_one_omits_thinking_text() {
    let text = tool_text(Some("1"));
    assert!(text.starts_with("\n<thinking>\n"));
    assert!(text.len() > "\n<thinking>\n".len());
}

#[test]
fn mode_two_omits_card() {
    let text = tool_text(Some("2"));
    assert!(text.starts_with("Now "));
    assert!(text.ends_with("\n<thinking>\n"));
}

#[test]
fn session_answers_every_request() {
    let out = cmd().write_stdin(SESSION).assert().success().get_output().stdout.clone();
    let replies = replies(&out);
    let ids: Vec<i64> = replies.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(replies[2]["result"]["prompts"], serde_json::json!([]));
    assert_eq!(replies[3]["result"]["resources"], serde_json::json!([]));
}

#[test]
fn list_flag_prints_tool_definition() {
    cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(contains("start_oblique_thinking"))
        .stdout(contains("Oblique Strategies"));
}
