use std::fs;
use std::process::{Command, Output};

fn generate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-sample-data"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run generate-sample-data")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone()).unwrap().lines().map(String::from).collect()
}

#[test]
fn zero_samples_prints_only_markers() {
    let output = generate(&["--samples", "0"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "generating sample data|size|0|start".to_string(),
            "generating sample data|size|0|done".to_string(),
        ]
    );
}

#[test]
fn stdout_data_between_markers() {
    let output = generate(&["--samples", "25"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 27);
    assert_eq!(lines[0], "generating sample data|size|25|start");
    assert_eq!(lines[26], "generating sample data|size|25|done");
    for (i, line) in lines[1..26].iter().enumerate() {
        assert!(line.contains(&format!("|index|{}|document classified|outcome|", i)), "{}", line);
    }
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn file_output_keeps_markers_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("samples.log");
    let output = generate(&["--samples", "500", "--file", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "generating sample data|size|500|start".to_string(),
            "generating sample data|size|500|done".to_string(),
        ]
    );

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.ends_with('\n'));
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(lines.len(), 500);
    for (i, line) in lines.iter().enumerate() {
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[2], i.to_string());
        match fields[5] {
            "SUCCESS" => assert_eq!(fields[6], "type"),
            "FAILURE" => assert_eq!(fields[6], "error"),
            other => panic!("unexpected outcome {}", other),
        }
        assert!(fields[9].parse::<u64>().is_ok());
    }
}

#[test]
fn negative_samples_generate_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("samples.log");
    let output = generate(&["--samples", "-7", "--file", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "generating sample data|size|-7|start".to_string(),
            "generating sample data|size|-7|done".to_string(),
        ]
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn unwritable_file_fails_before_start_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("samples.log");
    let output = generate(&["--samples", "10", "--file", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "{}", String::from_utf8_lossy(&output.stdout));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open output file"), "{}", stderr);
}

#[test]
fn missing_samples_prints_usage() {
    let output = generate(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--samples"), "{}", stderr);
    assert!(stderr.contains("Usage"), "{}", stderr);
}

#[test]
fn malformed_samples_rejected() {
    let output = generate(&["--samples", "ten"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
