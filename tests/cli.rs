use assert_cmd::Command;
use predicates::prelude::*;
use rstest::{fixture, rstest};
use std::path::Path;
use tempfile::TempDir;

fn git(repo: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn commit(repo: &Path, file: &str, content: &str) {
    let path = repo.join(file);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
    git(repo, &["add", "-A"]);
    git(repo, &["commit", "-q", "-m", file]);
}

fn diff_todos(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diff-todos").unwrap();
    cmd.arg("--repo").arg(repo).env_remove("RUST_LOG");
    cmd
}

/// A repository with one commit; returns the directory and that commit's SHA.
#[fixture]
fn repo() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path();
    git(path, &["init", "-q"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    commit(path, "src/app.py", "a = 1\nb = 2\n");
    let base = git(path, &["rev-parse", "HEAD"]);
    (dir, base)
}

#[rstest]
fn exits_zero_without_matches(repo: (TempDir, String)) {
    let (dir, base) = repo;
    commit(dir.path(), "src/app.py", "a = 1\nb = 3\n");

    diff_todos(dir.path())
        .args(["--old", &base])
        .assert()
        .code(0)
        .stdout("");
}

#[rstest]
fn exits_one_with_matches(repo: (TempDir, String)) {
    let (dir, base) = repo;
    commit(dir.path(), "src/app.py", "a = 1\n# TODO: fix\nb = 2\n# FIXME: later\n");

    diff_todos(dir.path())
        .args(["--old", &base, "--parsable-output"])
        .assert()
        .code(1)
        .stdout("src/app.py:2: # TODO: fix\nsrc/app.py:4: # FIXME: later\n");
}

#[rstest]
fn grouped_output_by_default(repo: (TempDir, String)) {
    let (dir, base) = repo;
    commit(dir.path(), "src/app.py", "a = 1\nb = 2  # TODO\n");

    diff_todos(dir.path())
        .args(["-o", &base])
        .assert()
        .code(1)
        .stdout("\nsrc/app.py\n\t2: b = 2  # TODO\n");
}

#[rstest]
fn custom_label_list(repo: (TempDir, String)) {
    let (dir, base) = repo;
    commit(dir.path(), "notes.txt", "HACK here\nTODO there\n");

    diff_todos(dir.path())
        .args(["-o", &base, "--parsable-output", "-l", "HACK", "XXX"])
        .assert()
        .code(1)
        .stdout("notes.txt:1: HACK here\n");
}

#[rstest]
fn unknown_revision_exits_three(repo: (TempDir, String)) {
    let (dir, _) = repo;

    diff_todos(dir.path())
        .args(["-o", "no-such-rev"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no-such-rev"));
}

#[rstest]
fn invalid_config_exits_four(repo: (TempDir, String)) {
    let (dir, base) = repo;
    std::fs::write(dir.path().join(".diff-todos.yaml"), "exclude: [\"src/[\"]\n").unwrap();

    diff_todos(dir.path())
        .args(["-o", &base])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid glob pattern"));
}

#[test]
fn outside_repository_exits_four() {
    let dir = TempDir::new().unwrap();

    diff_todos(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not inside a git repository"));
}

#[rstest]
fn verbose_logs_to_stderr_only(repo: (TempDir, String)) {
    let (dir, base) = repo;
    commit(dir.path(), "src/app.py", "a = 1 # FIXME\nb = 2\n");

    diff_todos(dir.path())
        .args(["-o", &base, "--parsable-output", "-v"])
        .assert()
        .code(1)
        .stdout("src/app.py:1: a = 1 # FIXME\n")
        .stderr(predicate::str::contains("Labels: TODO, FIXME"));
}
