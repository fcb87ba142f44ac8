use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_binary(a: &str, b: &str, reference: &str) -> (TempDir, Output) {
    let dir = TempDir::new().unwrap();
    let path = |name: &str| dir.path().join(name);

    fs::write(path("a.txt"), a).unwrap();
    fs::write(path("b.txt"), b).unwrap();
    fs::write(path("expected.txt"), reference).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_matfile"))
        .arg("--input-a")
        .arg(path("a.txt"))
        .arg("--input-b")
        .arg(path("b.txt"))
        .arg("--output")
        .arg(path("product.txt"))
        .arg("--reference")
        .arg(path("expected.txt"))
        .output()
        .unwrap();

    (dir, output)
}

#[test]
fn test_matching_reference_exits_zero() {
    let (dir, output) = run_binary("1 2\n3 4\n", "5 6\n7 8\n", "19 22\n43 50\n");

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Elapsed:"), "stdout: {}", stdout);
    assert!(stdout.contains("Result:   (2, 2)"), "stdout: {}", stdout);
    assert_eq!(
        fs::read_to_string(dir.path().join("product.txt")).unwrap(),
        "19 22\n43 50\n"
    );
}

#[test]
fn test_mismatched_reference_exits_nonzero() {
    let (dir, output) = run_binary("1 2\n3 4\n", "5 6\n7 8\n", "19 22\n43 51\n");

    assert!(!output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Elapsed"), "stdout: {}", stdout);
    // product is still written for inspection
    assert!(dir.path().join("product.txt").exists());
}

#[test]
fn test_dimension_mismatch_exits_nonzero() {
    let (_dir, output) = run_binary("1 2 3\n", "1 2 3\n", "");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
