use anyhow::Result;
use extrack::core::{parse_registry, render};
use httpmock::prelude::*;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::{CliTest, REGISTRY_PATH, stderr};

const HEADER: &str = "## Attention: External code changed";
const COMMENTS_PATH: &str = "/repos/acme/widgets/issues/12/comments";
const LABELS_PATH: &str = "/repos/acme/widgets/issues/12/labels";

#[test]
fn test_sync_requires_pull_request_number() -> Result<()> {
    let test = CliTest::with_registry()?;

    let output = test
        .sync_command()
        .args(["--repo", "acme/widgets"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--pr"));

    Ok(())
}

#[test]
fn test_sync_rejects_malformed_repository() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!(
        "sync_rejects_malformed_repository",
        test.sync_command()
            .env("GITHUB_REPOSITORY", "widgets")
            .env("PR_NUMBER", "12")
    );

    Ok(())
}

#[test]
fn test_sync_rejects_blank_bot_login() -> Result<()> {
    let test = CliTest::with_registry()?;

    assert_cmd_snapshot!(
        "sync_rejects_blank_bot_login",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--bot-login", " "])
    );

    Ok(())
}

#[test]
fn test_sync_invalid_registry_fails_before_contacting_github() -> Result<()> {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(200).json_body(json!([]));
    });

    let test = CliTest::with_file(REGISTRY_PATH, "file1 not-a-uri\n")?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_invalid_registry_fails",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "file1"])
    );
    list.assert_calls(0);

    Ok(())
}

#[test]
fn test_sync_creates_comment_and_label() -> Result<()> {
    let server = MockServer::start();
    let affected = parse_registry("file1 http://example1.com\n")?;
    let list = server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(200).json_body(json!([]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path(COMMENTS_PATH)
            .json_body(json!({ "body": render(HEADER, &affected) }));
        then.status(201).json_body(json!({ "id": 1 }));
    });
    let labels = server.mock(|when, then| {
        when.method(POST)
            .path(LABELS_PATH)
            .json_body(json!({ "labels": ["external-code-affected"] }));
        then.status(200).json_body(json!([]));
    });

    let test = CliTest::with_registry()?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_creates_comment_and_label",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "file1||docs/x.md"])
    );
    list.assert_calls(1);
    create.assert_calls(1);
    labels.assert_calls(1);

    Ok(())
}

#[test]
fn test_sync_leaves_identical_comment_alone() -> Result<()> {
    let server = MockServer::start();
    let affected = parse_registry("file1 http://example1.com\n")?;
    let list = server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(200).json_body(json!([{
            "id": 77,
            "body": render(HEADER, &affected),
            "user": { "login": "github-actions[bot]" }
        }]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path(COMMENTS_PATH);
        then.status(201).json_body(json!({ "id": 2 }));
    });
    let update = server.mock(|when, then| {
        when.method(PATCH).path("/repos/acme/widgets/issues/comments/77");
        then.status(200).json_body(json!({ "id": 77 }));
    });
    let labels = server.mock(|when, then| {
        when.method(POST).path(LABELS_PATH);
        then.status(200).json_body(json!([]));
    });

    let test = CliTest::with_registry()?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_leaves_identical_comment_alone",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "file1"])
    );
    list.assert_calls(1);
    create.assert_calls(0);
    update.assert_calls(0);
    labels.assert_calls(1);

    Ok(())
}

#[test]
fn test_sync_without_changes_or_comment_does_nothing() -> Result<()> {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(200).json_body(json!([]));
    });
    let writes = server.mock(|when, then| {
        when.method(POST);
        then.status(201).json_body(json!({}));
    });

    let test = CliTest::with_registry()?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_without_changes_does_nothing",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "README.md"])
    );
    list.assert_calls(1);
    writes.assert_calls(0);

    Ok(())
}

#[test]
fn test_sync_dry_run_only_lists() -> Result<()> {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(200).json_body(json!([]));
    });
    let writes = server.mock(|when, then| {
        when.method(POST);
        then.status(201).json_body(json!({}));
    });

    let test = CliTest::with_registry()?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_dry_run_only_lists",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "file3", "--dry-run"])
    );
    list.assert_calls(1);
    writes.assert_calls(0);

    Ok(())
}

#[test]
fn test_sync_reports_api_failure() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMMENTS_PATH);
        then.status(403).body("Forbidden");
    });

    let test = CliTest::with_registry()?;
    test.use_api_base(&server.base_url())?;

    assert_cmd_snapshot!(
        "sync_reports_api_failure",
        test.sync_command()
            .args(["--repo", "acme/widgets", "--pr", "12", "--changed", "file1"])
    );

    Ok(())
}
