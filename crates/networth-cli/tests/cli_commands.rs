use assert_cmd::cargo::cargo_bin_cmd;
use networth_testing::CliWorld;
use networth_testing::assertions::assert_active;
use networth_router::RouterSnapshot;
use predicates::prelude::*;

#[test]
fn test_route_json_reports_final_state() {
    let world = CliWorld::new();

    let result = world
        .run(&["--format", "json", "route", "#trends", "#assets-liabilities"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assert_eq!(json["fragment"], "#assets-liabilities");
    assert_eq!(
        json["notifications"],
        serde_json::json!([
            { "section": "trends" },
            { "section": "assets-liabilities" }
        ])
    );

    let snapshot: RouterSnapshot = serde_json::from_value(json["snapshot"].clone()).unwrap();
    assert_active(&snapshot, "assets-liabilities").unwrap();
}

#[test]
fn test_route_unknown_fragment_shows_dashboard() {
    let world = CliWorld::new();

    let result = world.run(&["route", "#budget"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Active section: dashboard"));
    assert!(result.stdout.contains("Fragment: #budget"));
}

#[test]
fn test_route_empty_fragment_defaults() {
    let world = CliWorld::new();

    let result = world.run(&["--format", "json", "route", ""]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.json().unwrap()["snapshot"]["active"], "dashboard");
}

#[test]
fn test_route_without_fragments_uses_start_fragment() {
    let world = CliWorld::new().with_config("start_fragment = \"#trends\"\n");

    let result = world.run(&["--format", "json", "route"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assert_eq!(json["fragment"], "#trends");
    assert_eq!(json["snapshot"]["active"], "trends");
}

#[test]
fn test_route_repeated_fragment_notifies_twice() {
    let world = CliWorld::new();

    let result = world
        .run(&["--format", "json", "route", "#trends", "#trends"])
        .unwrap();
    let json = result.json().unwrap();
    assert_eq!(json["notifications"].as_array().unwrap().len(), 2);
    assert_eq!(json["history"], serde_json::json!(["#trends", "#trends"]));
}

#[test]
fn test_sections_lists_configured_panes() {
    let world = CliWorld::new().with_config(
        r#"
[[panes]]
id = "dashboard"
title = "Home"

[[panes]]
id = "trends"
title = "History"
"#,
    );

    let result = world.run(&["--format", "json", "sections"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assert_eq!(json["sections"][0]["title"], "Home");
    assert_eq!(json["sections"][1]["fragment"], "#trends");
    assert_eq!(json["unregistered"], serde_json::json!(["assets-liabilities"]));
}

#[test]
fn test_missing_dashboard_pane_fails() {
    let world = CliWorld::new().with_config(
        r#"
[[panes]]
id = "trends"
title = "Trends"
"#,
    );

    let result = world.run(&["sections"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr.contains("Default section unavailable"));
}

#[test]
fn test_config_init_then_show() {
    let world = CliWorld::new();

    let init = world.run(&["config", "init"]).unwrap();
    assert!(init.success(), "stderr: {}", init.stderr);
    assert!(world.config_path().exists());

    let show = world.run(&["--format", "json", "config", "show"]).unwrap();
    let json = show.json().unwrap();
    assert_eq!(json["tick_rate_ms"], 250);
    assert_eq!(json["panes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_config_init_refuses_overwrite() {
    let world = CliWorld::new().with_config("tick_rate_ms = 100\n");

    let mut cmd = cargo_bin_cmd!("networth");
    world.configure_command(&mut cmd).args(["config", "init"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let mut cmd = cargo_bin_cmd!("networth");
    world
        .configure_command(&mut cmd)
        .args(["config", "init", "--force"]);
    cmd.assert().success();
}

#[test]
fn test_malformed_config_is_reported() {
    let world = CliWorld::new().with_config("tick_rate_ms = \"fast\"\n");

    let mut cmd = cargo_bin_cmd!("networth");
    world.configure_command(&mut cmd).arg("sections");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_data_dir_from_environment() {
    let world = CliWorld::new();
    let env_dir = world.temp_dir().join("from-env");

    let mut cmd = cargo_bin_cmd!("networth");
    cmd.env("NETWORTH_PATH", &env_dir).args(["config", "init"]);
    cmd.assert().success();

    assert!(env_dir.join("config.toml").exists());
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("networth");
    cmd.arg("--help");
    cmd.assert().success().stdout(
        predicate::str::contains("route")
            .and(predicate::str::contains("sections"))
            .and(predicate::str::contains("tui"))
            .and(predicate::str::contains("config")),
    );
}
