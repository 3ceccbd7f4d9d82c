//! Every failure exits with status 1, prints to stderr and leaves stdout empty.

use crate::common::Project;
use predicates::prelude::*;

#[test]
fn test_missing_source_file() {
    let project = Project::new();

    project
        .cmd()
        .args(["--json.web.path=nope.json", "--json.web.select=host"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("json \"WEB\" (path=\"nope.json\"): file not found"))
        .stderr(predicate::str::contains("Check that the file exists"));
}

#[test]
fn test_first_failure_suppresses_all_output() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--toml.port.path=cfg.toml",
            "--toml.port.select=server.port",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("toml \"PORT\""));
}

#[test]
fn test_non_scalar_selection() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args(["--json.srv.path=cfg.json", "--json.srv.select=server"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value at \"server\" is an object, not a scalar"));

    project
        .cmd()
        .args(["--yaml.e.path=cfg.yaml", "--yaml.e.select=empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is null, not a scalar"));
}

#[test]
fn test_malformed_source() {
    let project = Project::new();
    project.write("broken.json", "{\"a\": ");
    project.write("broken.env", "OK=1\nnot a pair\n");

    project
        .cmd()
        .args(["--json.a.path=broken.json", "--json.a.select=a"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to parse json file"));

    project
        .cmd()
        .args(["--file.ok.path=broken.env", "--file.ok.select=OK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: expected KEY=VALUE"));
}

#[test]
fn test_missing_required_fields_all_reported() {
    let project = Project::new();

    project
        .cmd()
        .args(["--json.a.as=A", "--ini.b.path=conf.ini"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing required flag --json.a.path"))
        .stderr(predicate::str::contains("missing required flag --json.a.select"))
        .stderr(predicate::str::contains("missing required flag --ini.b.select"));
}

#[test]
fn test_unknown_group_and_field() {
    let project = Project::new();

    project
        .cmd()
        .args(["--xml.a.path=a.xml", "--json.a.color=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dynamic group \"xml\""))
        .stderr(predicate::str::contains("unknown field \"color\" for group \"json\""));
}

#[test]
fn test_invalid_instance_quote() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args(["--file.t.path=app.env", "--file.t.select=TOKEN", "--file.t.quote=fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value \"fancy\" for flag --file.t.quote"));
}

#[test]
fn test_instance_flag_without_value() {
    let project = Project::new();

    project
        .cmd()
        .args(["--json.a.path", "--export"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flag needs an argument: --json.a.path"));
}

#[test]
fn test_unknown_global_option_is_usage_error() {
    Project::new()
        .cmd()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--frobnicate"))
        .stderr(predicate::str::contains("unveil --help"));
}
