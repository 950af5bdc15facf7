use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;

use common::create_fixture;

#[test]
fn test_help_flag() {
    Command::cargo_bin("treeline")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tree diagram"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--on-access-denied"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("treeline")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treeline"));
}

#[test]
fn test_renders_directory() {
    let tmp = create_fixture(&["a.txt", "sub/b.txt"]);
    Command::cargo_bin("treeline")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{251c}\u{2500}\u{2500} a.txt"))
        .stdout(predicate::str::contains("\u{2514}\u{2500}\u{2500} sub"))
        .stdout(predicate::str::contains("    \u{2514}\u{2500}\u{2500} b.txt"))
        .stdout(predicate::str::contains("1 directory, 2 files"));
}

#[test]
fn test_defaults_to_current_directory() {
    let tmp = create_fixture(&["only.txt"]);
    Command::cargo_bin("treeline")
        .unwrap()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{2514}\u{2500}\u{2500} only.txt"))
        .stdout(predicate::str::contains("0 directories, 1 file"));
}

#[test]
fn test_all_flag_shows_hidden() {
    let tmp = create_fixture(&[".env", "main.rs"]);
    Command::cargo_bin("treeline")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".env").not());

    Command::cargo_bin("treeline")
        .unwrap()
        .arg("-a")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{251c}\u{2500}\u{2500} .env"))
        .stdout(predicate::str::contains("0 directories, 2 files"));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    Command::cargo_bin("treeline")
        .unwrap()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("/this/path/does/not/exist"))
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_bad_root_does_not_stop_other_roots() {
    let good = create_fixture(&["kept.txt"]);
    let missing = TempDir::new().unwrap().path().join("gone");
    Command::cargo_bin("treeline")
        .unwrap()
        .arg(&missing)
        .arg(good.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("kept.txt"))
        .stderr(predicate::str::contains("gone"));
}

#[test]
fn test_multiple_roots_printed_in_order() {
    let first = create_fixture(&["first.txt"]);
    let second = create_fixture(&["second.txt"]);
    let output = Command::cargo_bin("treeline")
        .unwrap()
        .arg(first.path())
        .arg(second.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let a = stdout.find("first.txt").unwrap();
    let b = stdout.find("second.txt").unwrap();
    assert!(a < b, "roots should print in argument order:\n{stdout}");
}

#[test]
fn test_file_root_renders_as_leaf() {
    let tmp = create_fixture(&["afile.txt"]);
    Command::cargo_bin("treeline")
        .unwrap()
        .arg(tmp.path().join("afile.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("afile.txt\n\n0 directories, 0 files"));
}

#[test]
fn test_quiet_resets_verbose() {
    use clap::Parser;
    use treeline::cli::Args;
    let args = Args::parse_from(["treeline", "-vv", "--quiet", "."]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
}

#[test]
fn test_verbose_count_levels() {
    use clap::Parser;
    use treeline::cli::Args;
    let args = Args::parse_from(["treeline", "-vv", "."]).validated();
    assert_eq!(args.verbose, 2);
}

#[test]
fn test_multiple_positional_paths() {
    use clap::Parser;
    use std::path::PathBuf;
    use treeline::cli::Args;
    let args = Args::parse_from(["treeline", "src", "tests"]);
    assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
}

#[test]
fn test_invalid_access_policy_rejected() {
    Command::cargo_bin("treeline")
        .unwrap()
        .args(["--on-access-denied", "ignore", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
