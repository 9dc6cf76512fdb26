use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIVE: &str = "<p>one two three four five</p>";

/// 隔离用户配置目录，避免读到本机的 config.yaml
fn condense(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("condense").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_condense_text_from_stdin() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["condense", "--length", "10", "--min-trail", "5", "--block"])
        .write_stdin(FIVE)
        .assert()
        .success()
        .stdout("<p>one two three \n");
}

#[test]
fn test_condense_from_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("input.html");
    fs::write(&input, format!("{}\n", FIVE)).unwrap();

    condense(&home)
        .args(["condense", "-l", "10", "--min-trail", "5", "--block"])
        .arg(&input)
        .assert()
        .success()
        .stdout("<p>one two three \n");
}

#[test]
fn test_short_input_prints_original() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .arg("condense")
        .write_stdin("<b>hi</b>\n")
        .assert()
        .success()
        .stdout("<b>hi</b>\n")
        .stderr(predicate::str::contains("Not condensable"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["condense", "--format", "json"])
        .write_stdin("<b>hi</b>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"not_condensable\""));

    condense(&home)
        .args(["condense", "-f", "json", "-l", "10", "--min-trail", "5", "--block"])
        .write_stdin(FIVE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"condensed\""))
        .stdout(predicate::str::contains("\"prefix_text_length\": 14"));
}

#[test]
fn test_html_fragments_follow_state() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["condense", "-f", "html", "-l", "10", "--min-trail", "5", "--block"])
        .write_stdin(FIVE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<p>one two three </p> ( ... )"))
        .stdout(predicate::str::contains("condense_control_more"));

    condense(&home)
        .args([
            "condense", "-f", "html", "--state", "expanded", "-l", "10", "--min-trail", "5",
        ])
        .write_stdin(FIVE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(FIVE))
        .stdout(predicate::str::contains("condense_control_less"));
}

#[test]
fn test_config_file_is_applied() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("condense.yaml");
    fs::write(&config, "condensed_length: 10\nmin_trail: 5\ninline: false\n").unwrap();

    condense(&home)
        .arg("--config")
        .arg(&config)
        .arg("condense")
        .write_stdin(FIVE)
        .assert()
        .success()
        .stdout("<p>one two three \n");
}

#[test]
#[cfg(target_os = "linux")]
fn test_default_config_location() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("condense");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yaml"), "condensed_length: 42\n").unwrap();

    condense(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("condensed_length: 42"));
}

#[test]
fn test_text_subcommand() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .arg("text")
        .write_stdin("<p>fish &amp; <b>chips</b></p>")
        .assert()
        .success()
        .stdout("fish & chips\n");
}

#[test]
fn test_locate_skips_attribute() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["locate", "--start", "0"])
        .write_stdin(r#"<a title="a b">word</a> tail"#)
        .assert()
        .success()
        .stdout("23\n");
}

#[test]
fn test_locate_trims_like_condense() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["locate", "--start", "0"])
        .write_stdin("   <a title=\"a b\">word</a> tail\n")
        .assert()
        .success()
        .stdout("23\n");
}

#[test]
fn test_config_subcommand_shows_overrides() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["config", "--length", "80", "--block"])
        .assert()
        .success()
        .stdout(predicate::str::contains("condensed_length: 80"))
        .stdout(predicate::str::contains("inline: false"))
        .stdout(predicate::str::contains("min_trail: 20"));
}

#[test]
fn test_invalid_options_fail() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["condense", "--length", "0"])
        .write_stdin(FIVE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("condensed_length must be greater than zero"));

    condense(&home)
        .args(["condense", "--format", "xml"])
        .write_stdin(FIVE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));

    condense(&home)
        .args(["condense", "--state", "open"])
        .write_stdin(FIVE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown state"));
}

#[test]
fn test_missing_input_file_fails() {
    let home = TempDir::new().unwrap();
    condense(&home)
        .args(["condense", "does-not-exist.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.html"));
}
