use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const NOTE: &str =
    "Note: This is a heuristic (simple-name occurrences). Please verify before removing.";

fn create_test_file(dir: &Path, path: &str, content: &str) {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write test file");
}

/// Run importlint in `cwd` with given arguments and return (stdout, stderr, exit_code)
fn run_importlint(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_importlint"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_default_root_reports_unused_import() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    create_test_file(cwd, "src/Bar.java", "import java.io.IOException;\nclass Bar {}\n");

    let (stdout, _, exit_code) = run_importlint(cwd, &["--no-color"]);

    let expected_path = Path::new("src").join("Bar.java");
    assert_eq!(
        stdout,
        format!("{} -> java.io.IOException (occurrences=1)\n\n{}\n", expected_path.display(), NOTE)
    );
    assert_eq!(exit_code, 0);
}

#[test]
fn test_no_findings_message() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    create_test_file(
        cwd,
        "src/Foo.java",
        "import java.util.List;\nimport java.util.ArrayList;\nclass Foo { List<String> x = new ArrayList<>(); }\n",
    );

    let (stdout, stderr, exit_code) = run_importlint(cwd, &["--no-color"]);

    assert_eq!(stdout, format!("No likely-unused imports found.\n\n{}\n", NOTE));
    assert!(stderr.contains("Finished in"));
    assert_eq!(exit_code, 0);
}

#[test]
fn test_fail_on_findings_sets_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    create_test_file(cwd, "code/Bar.java", "import java.io.IOException;\nclass Bar {}\n");

    let (stdout, _, exit_code) =
        run_importlint(cwd, &["--root", "code", "--fail-on-findings", "--no-color"]);

    assert!(stdout.contains("java.io.IOException (occurrences=1)"));
    assert!(stdout.ends_with(&format!("\n\n{}\n", NOTE)));
    assert_eq!(exit_code, 1);
}

#[test]
fn test_fail_on_findings_without_findings_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();
    create_test_file(cwd, "src/Plain.java", "class Plain {}\n");

    let (_, _, exit_code) = run_importlint(cwd, &["--fail-on-findings", "--no-color"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn test_missing_root_fails_without_report() {
    let temp_dir = TempDir::new().unwrap();

    let (stdout, stderr, exit_code) = run_importlint(temp_dir.path(), &["--root", "missing"]);

    assert!(stdout.is_empty());
    assert!(stderr.contains("Error"));
    assert_ne!(exit_code, 0);
}
