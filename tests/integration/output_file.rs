use crate::common::Project;
use predicates::prelude::*;

#[test]
fn test_output_file_written_and_stdout_empty() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--yaml.user.path=cfg.yaml",
            "--yaml.user.select=db.user",
            "-o",
            "out/.env",
        ])
        .assert()
        .success()
        .stdout("");

    assert_eq!(project.read("out/.env"), "TOKEN=secret\nUSER=alice\n");
}

#[test]
fn test_output_file_replaced_atomically() {
    let project = Project::with_all_sources();
    project.write(".env", "STALE=1\n");

    project
        .cmd()
        .args([
            "--export",
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--output=.env",
        ])
        .assert()
        .success();

    assert_eq!(project.read(".env"), "export TOKEN=secret\n");
    assert!(project.entries_with_prefix(".unveil-").is_empty());
}

#[test]
fn test_output_file_untouched_on_failure() {
    let project = Project::with_all_sources();
    project.write(".env", "KEEP=1\n");

    project
        .cmd()
        .args([
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--json.bad.path=cfg.json",
            "--json.bad.select=server.missing",
            "--output=.env",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("key \"server.missing\" not found"));

    assert_eq!(project.read(".env"), "KEEP=1\n");
    assert!(project.entries_with_prefix(".unveil-").is_empty());
}

#[test]
fn test_output_from_environment() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .env("UNVEIL_OUTPUT", "from-env.env")
        .args(["--file.token.path=app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(project.read("from-env.env"), "TOKEN=secret\n");
}

#[test]
fn test_no_instances_creates_no_file() {
    let project = Project::new();

    project.cmd().args(["--output=.env"]).assert().success().stdout("");

    assert!(!project.path(".env").exists());
}

#[test]
fn test_output_parent_is_a_file() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--output=app.env/out.env",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("creating output directory"));

    assert_eq!(project.read("app.env"), "# app env\nexport TOKEN=secret\nEMPTY=\n");
}

#[test]
fn test_empty_output_prints_to_stdout() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args(["--file.token.path=app.env", "--file.token.select=TOKEN", "--output="])
        .assert()
        .success()
        .stdout("TOKEN=secret\n");

    assert!(project.entries_with_prefix(".unveil-").is_empty());
}
