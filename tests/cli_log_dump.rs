use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "tracelog-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

const SNAPSHOT: &str = r#"
{
    "events": [
        { "method": "console", "time": 2.0, "message": { "guid": "m1" } },
        { "method": "pageError", "time": 4.0, "error": { "error": { "message": "boom" } } }
    ],
    "stdio": [
        { "timestamp": 1.0, "type": "stdout", "text": "ready" },
        { "timestamp": 3.0, "type": "stderr", "text": "warned" }
    ],
    "initializers": {
        "m1": {
            "type": "log",
            "text": "n: 7",
            "args": [
                { "preview": "n: %d", "value": "n: %d" },
                { "preview": "7", "value": 7 }
            ]
        }
    }
}
"#;

#[test]
fn log_dump_prints_ordered_timeline() {
    let dir = unique_temp_dir("dump");
    let trace = write_file(&dir, "trace.json", SNAPSHOT);

    let output = Command::new(env!("CARGO_BIN_EXE_log_dump"))
        .args(["--trace", trace.to_str().unwrap()])
        .output()
        .expect("run log_dump");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5, "4 entries + summary: {stdout}");
    assert!(lines[0].contains("stdout") && lines[0].contains("ready"));
    assert!(lines[1].contains("browser") && lines[1].contains("n: 7"));
    assert!(lines[2].contains("stderr") && lines[2].contains("warned"));
    assert!(lines[3].contains("page-error") && lines[3].contains("boom"));
    assert!(lines[4].contains("total=4 visible=4"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn log_dump_applies_time_window_and_json_output() {
    let dir = unique_temp_dir("dump-window");
    let trace = write_file(&dir, "trace.json", SNAPSHOT);

    let output = Command::new(env!("CARGO_BIN_EXE_log_dump"))
        .args([
            "--trace",
            trace.to_str().unwrap(),
            "--min-ms",
            "2",
            "--max-ms",
            "3",
            "--json",
        ])
        .output()
        .expect("run log_dump");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);

    let entries: Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    let entries = entries.as_array().expect("array of entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["timestamp"], 2.0);
    assert_eq!(entries[0]["kind"], "browser_message");
    assert_eq!(entries[1]["timestamp"], 3.0);
    assert_eq!(entries[1]["kind"], "node_message");
    assert_eq!(entries[1]["is_error"], true);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn log_dump_fails_cleanly_on_missing_snapshot() {
    let dir = unique_temp_dir("dump-missing");
    let bogus = dir.join("nope.json");

    let output = Command::new(env!("CARGO_BIN_EXE_log_dump"))
        .args(["--trace", bogus.to_str().unwrap()])
        .output()
        .expect("run log_dump");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("read snapshot"), "stderr: {stderr}");

    fs::remove_dir_all(&dir).ok();
}
