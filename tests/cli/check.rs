use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, REGISTRY_PATH, stdout};

#[test]
fn test_check_reports_affected_files() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!(
        "check_reports_affected_files",
        test.check_command()
            .env("GIT_DIFF_SERIALIZED", "file1||README.md||file3")
    );

    Ok(())
}

#[test]
fn test_check_clean_change_set() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!(
        "check_clean_change_set",
        test.check_command()
            .args(["--changed", "src/lib.rs||docs/index.md"])
    );

    Ok(())
}

#[test]
fn test_check_without_changed_files() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!("check_without_changed_files", test.check_command());

    Ok(())
}

#[test]
fn test_check_invalid_registry_fails() -> Result<()> {
    let test = CliTest::with_file(
        REGISTRY_PATH,
        "file1 http://example1.com\nfile2 https://example.com/post?id=1\n",
    )?;

    assert_cmd_snapshot!(
        "check_invalid_registry_fails",
        test.check_command().args(["--changed", "file1"])
    );

    Ok(())
}

#[test]
fn test_check_missing_registry_fails() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({
        filters => vec![(r"(Failed to read registry file: [^:]+): .+", "$1: [IO ERROR]")]
    }, {
        assert_cmd_snapshot!("check_missing_registry_fails", test.check_command());
    });

    Ok(())
}

#[test]
fn test_check_custom_registry_and_delimiter() -> Result<()> {
    let test = CliTest::with_file("cited.txt", "src/main.rs https://blog.example.com/intro\n")?;

    assert_cmd_snapshot!(
        "check_custom_registry_and_delimiter",
        test.check_command()
            .args(["--registry", "cited.txt", "--delimiter", ","])
            .args(["--changed", "src/main.rs,Cargo.toml"])
    );

    Ok(())
}

#[test]
fn test_check_blank_delimiter_fails() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!(
        "check_blank_delimiter_fails",
        test.check_command()
            .args(["--delimiter", " ", "--changed", "file1"])
    );

    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("refs/cited.txt", "a.py https://example.com/a\n")?;
    test.write_file(
        ".extrackrc.json",
        r#"{ "registryPath": "refs/cited.txt", "delimiter": ";" }"#,
    )?;

    assert_cmd_snapshot!(
        "check_uses_config_file",
        test.check_command().args(["--changed", "b.py;a.py"])
    );

    Ok(())
}

#[test]
fn test_check_verbose() -> Result<()> {
    let test = CliTest::with_file("refs/cited.txt", "a.py https://example.com/a\n")?;
    test.write_file(
        ".extrackrc.json",
        r#"{ "registryPath": "refs/cited.txt", "delimiter": ";" }"#,
    )?;
    let root = regex::escape(&test.root().display().to_string());

    insta::with_settings!({
        filters => vec![(root.as_str(), "[ROOT]")]
    }, {
        assert_cmd_snapshot!(
            "check_verbose",
            test.check_command().args(["-v", "--changed", "b.py;a.py"])
        );
    });

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({
        filters => vec![(r"\d+\.\d+\.\d+", "[VERSION]")]
    }, {
        assert_cmd_snapshot!("version", test.command().arg("--version"));
    });

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["check", "render", "sync", "init"] {
        assert!(out.contains(command), "help should list {command}");
    }

    Ok(())
}
