use crate::common::Project;
use predicates::prelude::*;

#[test]
fn test_help_lists_instance_flags() {
    Project::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: unveil"))
        .stdout(predicate::str::contains("--quote <MODE>"))
        .stdout(predicate::str::contains("--KIND.ID.select KEY"));
}

#[test]
fn test_version() {
    Project::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("unveil {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_is_a_quiet_noop() {
    Project::new().cmd().assert().success().stdout("").stderr("");
}

#[test]
fn test_quote_from_environment() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .env("UNVEIL_QUOTE", "json")
        .args(["--file.token.path=app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("TOKEN=\"secret\"\n");
}

#[test]
fn test_flag_overrides_environment_quote() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .env("UNVEIL_QUOTE", "json")
        .args(["--quote", "single", "--file.token.path=app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("TOKEN='secret'\n");
}

#[test]
fn test_export_from_environment() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .env("UNVEIL_EXPORT", "true")
        .args(["--file.token.path=app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("export TOKEN=secret\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args(["-v", "--file.token.path=app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("TOKEN=secret\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    Project::new().cmd().args(["-v", "-q"]).assert().failure().code(1).stdout("");
}

#[test]
fn test_instance_ids_may_contain_dots() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--yaml.db.user.path=cfg.yaml",
            "--yaml.db.user.select=db.user",
            "--yaml.db.user.as=DB_USER",
        ])
        .assert()
        .success()
        .stdout("DB_USER=alice\n");
}
