use std::fs;
use std::path::Path;

use matfile::driver::run;
use matfile::{Config, MatfileError, ValidationError};
use tempfile::TempDir;

fn setup(a: &str, b: &str, reference: &str) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let path = |name: &str| dir.path().join(name);

    fs::write(path("matrix1.txt"), a).unwrap();
    fs::write(path("matrix2.txt"), b).unwrap();
    fs::write(path("result.txt"), reference).unwrap();

    let config = Config::new(
        path("matrix1.txt"),
        path("matrix2.txt"),
        path("result_matrix.txt"),
        path("result.txt"),
    );
    (dir, config)
}

fn output(config: &Config) -> String {
    fs::read_to_string(&config.output).unwrap()
}

#[test]
fn test_end_to_end() {
    let (_dir, config) = setup("1 2\n3 4\n", "5 6\n7 8\n", "19.0 22.0\n43.0 50.0\n");

    let report = run(&config).unwrap();

    assert_eq!(report.shape_a, (2, 2));
    assert_eq!(report.shape_b, (2, 2));
    assert_eq!(report.shape_result, (2, 2));
    assert!(report.verified);
    assert_eq!(output(&config), "19 22\n43 50\n");
}

#[test]
fn test_end_to_end_threaded() {
    let (_dir, mut config) = setup("1 1 1\n1 1 1\n", "1 1\n1 1\n1 1\n", "3 3\n3 3\n");
    config.threads = 4;

    let report = run(&config).unwrap();

    assert_eq!(report.shape_result, (2, 2));
    assert_eq!(output(&config), "3 3\n3 3\n");
}

#[test]
fn test_reference_mismatch_fails_but_writes_output() {
    let (_dir, config) = setup("1 2\n3 4\n", "5 6\n7 8\n", "19 22\n43 51\n");

    match run(&config) {
        Err(MatfileError::Validation(ValidationError::ValueMismatch { row, col, .. })) => {
            assert_eq!((row, col), (1, 1));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(output(&config), "19 22\n43 50\n");
}

#[test]
fn test_no_verify_ignores_reference() {
    let (dir, mut config) = setup("2\n", "3\n", "");
    config.no_verify = true;
    fs::remove_file(dir.path().join("result.txt")).unwrap();

    let report = run(&config).unwrap();

    assert!(!report.verified);
    assert_eq!(output(&config), "6\n");
}

#[test]
fn test_dimension_mismatch_aborts_before_output() {
    let (_dir, config) = setup("1 2 3\n4 5 6\n", "1 2 3\n4 5 6\n", "");

    assert!(matches!(
        run(&config),
        Err(MatfileError::DimensionMismatch { .. })
    ));
    assert!(!Path::new(&config.output).exists());
}

#[test]
fn test_parse_error_propagates() {
    let (_dir, config) = setup("1 2\n3 four\n", "1\n1\n", "");

    assert!(matches!(
        run(&config),
        Err(MatfileError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_missing_input_names_path() {
    let (dir, config) = setup("1\n", "1\n", "1\n");
    fs::remove_file(dir.path().join("matrix2.txt")).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, MatfileError::File { .. }));
    assert!(err.to_string().contains("matrix2.txt"));
}
