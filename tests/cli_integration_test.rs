//! Integration tests running the built binary.

use std::collections::HashSet;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn distinct_gen_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_distinct-gen"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_no_args_generates_default_file() {
    let dir = TempDir::new().unwrap();

    let output = distinct_gen_bin()
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "generated: data.txt");
    assert_eq!(lines[1], "count lines: 100000");

    let reported: usize = lines[2]
        .strip_prefix("count unique: ")
        .unwrap()
        .parse()
        .unwrap();

    let text = fs::read_to_string(dir.path().join("data.txt")).unwrap();
    let distinct: HashSet<&str> = text.lines().collect();
    assert_eq!(text.lines().count(), 100_000);
    assert_eq!(reported, distinct.len());
    assert!(reported <= 100_000);
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("values.txt");

    let run = || {
        let output = distinct_gen_bin()
            .arg("generate")
            .arg("--count")
            .arg("1000")
            .arg("--output")
            .arg(&out)
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success());
        (stdout_of(&output), fs::read(&out).unwrap())
    };

    let (stdout_a, file_a) = run();
    let (stdout_b, file_b) = run();
    assert_eq!(stdout_a, stdout_b);
    assert_eq!(file_a, file_b);
}

#[test]
fn test_seed_flag_changes_output() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");

    for (path, seed) in [(&a, "1"), (&b, "2")] {
        let status = distinct_gen_bin()
            .args(["generate", "-n", "500", "--seed", seed, "-o"])
            .arg(path)
            .status()
            .unwrap();
        assert!(status.success());
    }

    assert_ne!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_generate_json_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("data.txt");

    let output = distinct_gen_bin()
        .args(["generate", "--count", "200", "--upper-bound", "50", "--json", "--output"])
        .arg(&out)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect(&format!("Failed to parse JSON: {}", stdout));

    assert_eq!(json["lines_written"], 200);
    assert!(json["unique_values"].as_u64().unwrap() <= 50);
    assert!(json.get("output_path").is_some());
}

#[test]
fn test_config_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gen.yaml");
    let out = dir.path().join("from_config.txt");
    fs::write(
        &config,
        format!("count: 40\nseed: 3\noutput: {}\n", out.display()),
    )
    .unwrap();

    let output = distinct_gen_bin()
        .args(["generate", "--count", "25", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 25);
    assert!(stdout_of(&output).contains("count lines: 25"));
}

#[test]
fn test_unwritable_output_fails_without_summary() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing_dir").join("data.txt");

    let output = distinct_gen_bin()
        .args(["generate", "--count", "10", "--output"])
        .arg(&out)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(!stdout_of(&output).contains("generated:"));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    assert!(!out.exists());
}

#[test]
fn test_zero_upper_bound_rejected() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("data.txt");

    let output = distinct_gen_bin()
        .args(["generate", "--upper-bound", "0", "--output"])
        .arg(&out)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_stats_after_generate() {
    let dir = TempDir::new().unwrap();

    let gen = distinct_gen_bin()
        .current_dir(dir.path())
        .args(["generate", "--count", "5000"])
        .output()
        .unwrap();
    assert!(gen.status.success());
    let gen_stdout = stdout_of(&gen);
    let unique_line = gen_stdout
        .lines()
        .find(|l| l.starts_with("count unique:"))
        .unwrap()
        .to_string();

    let stats = distinct_gen_bin()
        .current_dir(dir.path())
        .args(["stats", "--json"])
        .output()
        .unwrap();
    assert!(stats.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&stats)).unwrap();
    assert_eq!(json["lines"], 5000);
    assert_eq!(json["out_of_range"], 0);
    assert_eq!(
        format!("count unique: {}", json["unique_values"]),
        unique_line
    );
    assert!(json["estimate"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_stats_missing_file() {
    let dir = TempDir::new().unwrap();
    let output = distinct_gen_bin()
        .current_dir(dir.path())
        .args(["stats", "nope.txt"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_completions() {
    let output = distinct_gen_bin()
        .args(["completions", "bash"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("distinct-gen"));
}

#[test]
fn test_stats_rejects_signed_record() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "12\n+5\n").unwrap();

    let output = distinct_gen_bin()
        .current_dir(dir.path())
        .arg("stats")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}
