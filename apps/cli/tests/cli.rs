use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("slugeq.toml");
    let data_dir = dir.join("overrides");
    fs::write(
        &path,
        format!(
            r#"
[settings]
enabled_sections = ["news"]

[store]
data_dir = "{}"

[log]
console = false
"#,
            data_dir.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();
    path
}

fn slugeq(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_slugeq"));
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn set_then_get_roundtrips() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    slugeq(&config).args(["set", "42", "false"]).assert().success().stdout("42: false\n");
    slugeq(&config).args(["get", "42"]).assert().success().stdout("42: false\n");
    slugeq(&config).args(["get", "7"]).assert().success().stdout("7: not overridden\n");
}

#[test]
fn list_shows_records_in_id_order() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    slugeq(&config).arg("list").assert().success().stdout("No overrides stored.\n");
    slugeq(&config).args(["set", "9", "true"]).assert().success();
    slugeq(&config).args(["set", "3", "false"]).assert().success();

    slugeq(&config).arg("list").assert().success().stdout("3: false\n9: true\n");
    slugeq(&config)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"elementId\": 3"));
}

#[test]
fn check_reports_the_deciding_tier() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    slugeq(&config)
        .args(["check", "--class", "element.entry", "--type", "news", "--id", "1"])
        .assert()
        .success()
        .stdout("1: true (content type `news`)\n");

    slugeq(&config).args(["set", "1", "false"]).assert().success();
    slugeq(&config)
        .args(["check", "--class", "element.entry", "--type", "news", "--id", "1"])
        .assert()
        .success()
        .stdout("1: false (element override)\n");

    slugeq(&config)
        .args(["check", "--class", "element.asset", "--type", "photos", "--id", "2"])
        .assert()
        .success()
        .stdout("2: false (unsupported element)\n");
}

#[test]
fn check_builds_each_built_in_family() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    slugeq(&config)
        .args(["check", "--class", "element.category", "--type", "news", "--id", "3"])
        .assert()
        .success()
        .stdout("3: false (content type `news`)\n");

    let text = fs::read_to_string(&config).unwrap().replace(
        "[settings]\n",
        "[settings]\nenabled_product_types = [\"shirts\"]\n",
    );
    fs::write(&config, text + "\n[plugins]\ncommerce = true\n").unwrap();

    slugeq(&config)
        .args(["check", "--class", "commerce.product", "--type", "shirts", "--id", "4"])
        .assert()
        .success()
        .stdout("4: true (content type `shirts`)\n");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    slugeq(&temp.path().join("absent.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn invalid_boolean_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    slugeq(&config).args(["set", "1", "maybe"]).assert().failure();
}
