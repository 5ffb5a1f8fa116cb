use std::process::Command;

fn simulate(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_shipgame"))
        .args(["simulate", "--seed", seed, "--json"])
        .output()
        .expect("failed to run shipgame binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn simulate_binary_smoke() {
    let v = simulate("1");
    assert!(v["winner"].is_string());
    assert_ne!(v["outcome"], "UNFINISHED");
    let remaining = &v["ships_remaining"];
    let zero_sides = [&remaining["first"], &remaining["second"]]
        .iter()
        .filter(|n| n.as_u64() == Some(0))
        .count();
    assert_eq!(zero_sides, 1);
}

#[test]
fn simulate_is_reproducible_with_seed() {
    assert_eq!(simulate("12345"), simulate("12345"));
}
