//! Subprocess-driven fixture runner, mirroring the teacher's own
//! `cargo run --` harness: walks `tests/fixtures/*/ast.json`, runs the built
//! `check` subcommand against each, and diffs stdout against the sibling
//! `expected_output.txt`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn find_fixtures() -> Vec<PathBuf> {
    let fixtures_dir = Path::new("tests/fixtures");
    let mut dirs = Vec::new();

    if let Ok(entries) = fs::read_dir(fixtures_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() && path.join("ast.json").exists() {
                dirs.push(path);
            }
        }
    }

    dirs.sort();
    dirs
}

struct RunOutput {
    stdout: String,
    stderr: String,
}

fn run_fixture(dir: &Path) -> Result<RunOutput, String> {
    let fixture = dir.join("ast.json");
    let output = Command::new(env!("CARGO_BIN_EXE_zen-typecheck"))
        .arg("check")
        .arg(&fixture)
        .arg("--file")
        .arg("fixture.zen")
        .output()
        .map_err(|e| format!("failed to execute binary: {}", e))?;

    Ok(RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[test]
fn fixtures_match_expected_stdout() {
    let dirs = find_fixtures();
    assert!(!dirs.is_empty(), "no fixtures found under tests/fixtures/");

    let mut failures = Vec::new();

    for dir in &dirs {
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");
        let expected = fs::read_to_string(dir.join("expected_output.txt"))
            .unwrap_or_else(|e| panic!("fixture '{}' missing expected_output.txt: {}", name, e));

        match run_fixture(dir) {
            Ok(actual) if actual.stdout.trim() == expected.trim() => {}
            Ok(actual) => failures.push(format!(
                "fixture '{}': stdout mismatch\nexpected:\n{}\nactual:\n{}\nstderr:\n{}",
                name,
                expected.trim(),
                actual.stdout.trim(),
                actual.stderr.trim()
            )),
            Err(e) => failures.push(format!("fixture '{}': {}", name, e)),
        }
    }

    if !failures.is_empty() {
        panic!("{} fixture(s) failed:\n{}", failures.len(), failures.join("\n\n"));
    }
}

#[test]
fn sign_mismatch_fixture_reports_diagnostic_on_stderr() {
    let dir = Path::new("tests/fixtures/sign_mismatch");
    let output = run_fixture(dir).expect("failed to run sign_mismatch fixture");
    assert!(
        output.stderr.contains("Sign mismatch"),
        "expected a sign-mismatch diagnostic on stderr, got: {}",
        output.stderr
    );
    assert!(output.stderr.contains("fixture.zen"), "diagnostic should use the --file override");
}
