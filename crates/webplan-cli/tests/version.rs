//! Integration tests for `webplan version`.

use std::process::Command;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-q", "-p", "webplan-cli", "--bin", "webplan", "--"]);
    cmd
}

#[test]
fn test_version_ignores_node_env() {
    let output = cargo_bin()
        .env("NODE_ENV", "test")
        .arg("version")
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("webplan "), "stdout: {stdout}");
}

#[test]
fn test_plan_still_rejects_bad_node_env() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), r#"{"name":"viewer"}"#).unwrap();
    let output = cargo_bin()
        .env("NODE_ENV", "test")
        .arg("--json")
        .arg("--cwd")
        .arg(dir.path())
        .arg("plan")
        .output()
        .expect("Failed to run plan command");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(json["error"]["code"], "UNKNOWN_MODE");
}

#[test]
fn test_version_json() {
    let output = cargo_bin()
        .arg("--json")
        .arg("version")
        .output()
        .expect("Failed to run version command");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
