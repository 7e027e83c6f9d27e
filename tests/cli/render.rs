use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_render_changed_body() -> Result<()> {
    let test = CliTest::with_registry()?;

    let output = test
        .render_command()
        .env("GIT_DIFF_SERIALIZED", "||file3||file1||")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "## Attention: External code changed

This PR changes code that is used or cited in external sources, e.g. blog posts.

Before merging this PR, please make sure that the code in the external sources is still working, and consider updating them to reflect the changes.

The affected files and the external sources are:
- `file1`: http://example1.com
- `file3`: http://example3.com
"
    );

    Ok(())
}

#[test]
fn test_render_not_changed_body_with_custom_header() -> Result<()> {
    let test = CliTest::with_registry()?;

    let output = test
        .render_command()
        .args(["--header", "### Cited code"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "### Cited code

A previous version of this PR changed code that is used or cited in  external sources, e.g. blog posts.

It looks like these changes have been reverted or are otherwise not present in this PR anymore. Please still carefully review the changes to make sure code we use in external sources still works.
"
    );

    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let test = CliTest::with_registry()?;

    let first = test.render_command().args(["--changed", "file2"]).output()?;
    let second = test.render_command().args(["--changed", "file2"]).output()?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}
