use crate::common::Project;

#[test]
fn test_every_kind_sorted_output() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--json.web.path=cfg.json",
            "--json.web.select=server.host",
            "--json.web.as=HOST",
            "--yaml.db.path=cfg.yaml",
            "--yaml.db.select=db.user",
            "--yaml.db.as=DB_USER",
            "--toml.svc.path=cfg.toml",
            "--toml.svc.select=server.host",
            "--ini.port.path=conf.ini",
            "--ini.port.select=DB.Port",
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--file.token.as=APPTOKEN",
        ])
        .assert()
        .success()
        .stdout("APPTOKEN=secret\nDB_USER=alice\nHOST=localhost\nPORT=5432\nSVC=toml-host\n");
}

#[test]
fn test_scalars_render_as_text() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--json.tls.path=cfg.json",
            "--json.tls.select=server.tls",
            "--json.https.path=cfg.json",
            "--json.https.select=server.ports.1",
            "--yaml.pool.path=cfg.yaml",
            "--yaml.pool.select=db.pool",
            "--toml.ratio.path=cfg.toml",
            "--toml.ratio.select=server.ratio",
            "--file.empty.path=app.env",
            "--file.empty.select=EMPTY",
        ])
        .assert()
        .success()
        .stdout("EMPTY=\nHTTPS=443\nPOOL=5\nRATIO=1.5\nTLS=true\n");
}

#[test]
fn test_ini_quotes_are_stripped() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args(["--ini.user.path", "conf.ini", "--ini.user.select", "DB.User"])
        .assert()
        .success()
        .stdout("USER=alice\n");
}

#[test]
fn test_quote_modes() {
    let project = Project::with_all_sources();
    project.write("special.env", "V=a$b \"c\"\n");

    project
        .cmd()
        .args([
            "--quote=single",
            "--json.name.path=cfg.json",
            "--json.name.select=name",
            "--file.dq.path=special.env",
            "--file.dq.select=V",
            "--file.dq.quote=double",
            "--file.js.path=special.env",
            "--file.js.select=V",
            "--file.js.quote=json",
            "--file.raw.path=special.env",
            "--file.raw.select=V",
            "--file.raw.quote=none",
        ])
        .assert()
        .success()
        .stdout(
            "DQ=\"a\\$b \\\"c\\\"\"\n\
             JS=\"a$b \\\"c\\\"\"\n\
             NAME='o'\\''neil'\n\
             RAW=a$b \"c\"\n",
        );
}

#[test]
fn test_export_prefix() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--export",
            "--file.token.path=app.env",
            "--file.token.select=TOKEN",
            "--yaml.user.path=cfg.yaml",
            "--yaml.user.select=db.user",
        ])
        .assert()
        .success()
        .stdout("export TOKEN=secret\nexport USER=alice\n");
}

#[test]
fn test_same_variable_last_declared_wins() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .args([
            "--json.a.path=cfg.json",
            "--json.a.select=server.host",
            "--json.a.as=HOST",
            "--toml.b.path=cfg.toml",
            "--toml.b.select=server.host",
            "--toml.b.as=HOST",
        ])
        .assert()
        .success()
        .stdout("HOST=toml-host\n");
}

#[test]
fn test_paths_expand_environment_variables() {
    let project = Project::with_all_sources();

    project
        .cmd()
        .env("UNVEIL_TEST_DIR", project.root())
        .args(["--file.token.path=$UNVEIL_TEST_DIR/app.env", "--file.token.select=TOKEN"])
        .assert()
        .success()
        .stdout("TOKEN=secret\n");
}
