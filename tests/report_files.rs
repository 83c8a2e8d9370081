use std::{fs, path::PathBuf};

use ff_compute::{run_files, GrammarError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ff-compute-{}-{}", std::process::id(), name))
}

#[test]
fn writes_report() {
    let input = temp_path("writes_report.in");
    let output = temp_path("writes_report.out");
    fs::write(&input, "S -> A B\n\nA -> a\nA ->\nB -> b\n").unwrap();
    fs::write(&output, "stale contents that must be overwritten").unwrap();

    run_files(&input, &output).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "S'\na, b\n\nA\na\nb\nB\nb\n$$\nS\na, b\n$$\n"
    );

    // A second run over the same grammar produces the same bytes.
    let again = temp_path("writes_report.again");
    run_files(&input, &again).unwrap();
    assert_eq!(fs::read(&output).unwrap(), fs::read(&again).unwrap());

    for path in [input, output, again] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn missing_input() {
    let input = temp_path("does-not-exist.in");
    let output = temp_path("missing_input.out");
    let err = run_files(&input, &output).unwrap_err();
    assert!(matches!(err, GrammarError::Io { ref path, .. } if *path == input));
    assert!(!output.exists());
}

#[test]
fn unwritable_output() {
    let input = temp_path("unwritable_output.in");
    let output = temp_path("no-such-dir").join("out");
    fs::write(&input, "S->a\n").unwrap();

    let err = run_files(&input, &output).unwrap_err();
    assert!(matches!(err, GrammarError::Io { ref path, .. } if *path == output));
    assert!(!err.is_format_error());
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}

#[test]
fn format_error_leaves_no_report() {
    let input = temp_path("format_error.in");
    let output = temp_path("format_error.out");
    fs::write(&input, "S->a\nA a\n").unwrap();

    let err = run_files(&input, &output).unwrap_err();
    assert!(err.is_format_error());
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}
