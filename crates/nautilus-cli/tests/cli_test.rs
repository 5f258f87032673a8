use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("nautilus-cli"))
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run nautilus-cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_lays_out_a_fixture_with_its_document_strategy() {
    let out = stdout_json(cli().arg(fixture("chain.json")));
    let nodes = out.as_array().expect("array");
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0]["payload"]["title"], "Project plan");

    let ys: Vec<f64> = nodes
        .iter()
        .map(|n| n["position"]["y"].as_f64().expect("y"))
        .collect();
    assert_eq!(ys, vec![0.0, 100.0, 200.0, 300.0]);
}

#[test]
fn cli_flags_override_the_document() {
    let out = stdout_json(
        cli().args([
            "layout",
            "--strategy",
            "radial",
            "--focus",
            "c",
            fixture("chain.json").to_string_lossy().as_ref(),
        ]),
    );
    let c = &out.as_array().expect("array")[2];
    // Focus sits on the origin, shifted by half the default node box.
    assert_eq!(c["position"]["x"].as_f64(), Some(-86.0));
    assert_eq!(c["position"]["y"].as_f64(), Some(-18.0));
}

#[test]
fn cli_reads_stdin_and_passes_unknown_strategies_through() {
    let out = stdout_json(
        cli()
            .args(["--strategy", "spiral", "-"])
            .write_stdin(r#"{"nodes":[{"id":"x"},{"id":"y","position":{"x":3,"y":4}}]}"#),
    );
    assert_eq!(out[0].get("position"), None);
    assert_eq!(out[1]["position"]["x"].as_f64(), Some(3.0));
}

#[test]
fn cli_strict_mode_fails_on_unknown_strategies() {
    cli()
        .args(["--strict", "--strategy", "spiral", "-"])
        .write_stdin(r#"{"nodes":[{"id":"x"}]}"#)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_rejects_malformed_json() {
    cli().arg("-").write_stdin("{not json").assert().failure().code(1);
}

#[test]
fn cli_usage_errors_exit_with_two() {
    cli().arg("--bogus").assert().failure().code(2);
}

#[test]
fn cli_lists_strategies() {
    let output = cli().arg("strategies").output().expect("run");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "hierarchical\nforce\nradial\n"
    );
}

#[test]
fn cli_writes_pretty_json_from_a_temp_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("graph.json");
    std::fs::write(
        &path,
        r#"{"nodes":[{"id":"a"},{"id":"b"}],"edges":[{"source":"a","target":"b"}]}"#,
    )
    .expect("write graph");

    let output = cli()
        .args(["--pretty", "--iterations", "5"])
        .arg(&path)
        .output()
        .expect("run");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("\n  {"), "{text}");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}
