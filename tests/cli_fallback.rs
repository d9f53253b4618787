//! Binary smoke tests: without a matching pane, `send` prints its payload

use std::process::Command;

fn refpaste(config_dir: &std::path::Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_refpaste"));
    command.env("REFPASTE_CONFIG_DIR", config_dir);
    command.env_remove("REFPASTE_DEBUG");
    command
}

#[test]
fn test_send_without_targets_prints_payload() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = refpaste(temp.path())
        .args(["send", "src/main.rs:42 "])
        .output()
        .expect("Failed to run refpaste send");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "src/main.rs:42 ");
}

#[test]
fn test_send_with_unmatched_target_prints_payload() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = refpaste(temp.path())
        .args([
            "send",
            "--target",
            "refpaste-no-such-agent-for-tests",
            "src/lib.rs:1-9 ",
        ])
        .output()
        .expect("Failed to run refpaste send");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "src/lib.rs:1-9 ");
}

#[test]
fn test_config_path_honours_override() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = refpaste(temp.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to run refpaste config path");

    assert!(output.status.success());
    let printed = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        printed.trim(),
        temp.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_find_without_targets_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    let output = refpaste(temp.path())
        .arg("find")
        .output()
        .expect("Failed to run refpaste find");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No target applications"));
}

#[test]
fn test_config_init_writes_defaults_once() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let output = refpaste(temp.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to run refpaste config init");
    assert!(output.status.success());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("enumeration_timeout_ms = 2000"));

    std::fs::write(&path, "[auto_paste]\napplications = [\"codex\"]\n").unwrap();
    let output = refpaste(temp.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to run refpaste config init");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert!(std::fs::read_to_string(&path).unwrap().contains("codex"));

    let output = refpaste(temp.path())
        .args(["config", "init", "--force"])
        .output()
        .expect("Failed to run refpaste config init --force");
    assert!(output.status.success());
    assert!(!std::fs::read_to_string(&path).unwrap().contains("codex"));
}
