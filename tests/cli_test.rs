use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn write_script(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("shipgame-{}-{}.txt", name, std::process::id()));
    fs::write(&path, body).expect("failed to write script");
    path
}

fn replay(script: &PathBuf, json: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shipgame"));
    cmd.arg("replay").arg(script);
    if json {
        cmd.arg("--json");
    }
    cmd.output().expect("failed to run shipgame binary")
}

const GAME: &str = "\
# two ships each
place first 3 A1 R
place second 2 A1 C
place first 2 A1 C
fire second A1
fire first A1
fire second J10
fire first B1
fire second A2
";

#[test]
fn test_replay_reports_results() {
    let script = write_script("text", GAME);
    let output = replay(&script, false);
    fs::remove_file(&script).ok();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("place first 3 A1 R: ok"));
    assert!(stdout.contains("place first 2 A1 C: rejected"));
    assert!(stdout.contains("fire second A1: rejected"));
    assert!(stdout.contains("fire first A1: hit"));
    assert!(stdout.contains("fire first B1: sink"));
    assert!(stdout.contains("Outcome: FIRST_WON"));
}

#[test]
fn test_replay_json_summary() {
    let script = write_script("json", GAME);
    let output = replay(&script, true);
    fs::remove_file(&script).ok();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["outcome"], "FIRST_WON");
    assert_eq!(v["winner"], "first");
    assert_eq!(v["shots_fired"], 3);
    assert_eq!(v["rejected"], 3);
    assert_eq!(v["ships_remaining"]["second"], 0);
    assert_eq!(v["ships_remaining"]["first"], 1);
}

#[test]
fn test_replay_rejects_malformed_coordinate() {
    let script = write_script("bad", "place first 3 K1 R\n");
    let output = replay(&script, false);
    fs::remove_file(&script).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 1"));
}

#[test]
fn test_replay_rejects_huge_ship_length() {
    let script = write_script("huge", "place first 18446744073709551615 A2 R\n");
    let output = replay(&script, false);
    fs::remove_file(&script).ok();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("place first 18446744073709551615 A2 R: rejected"));
}
