use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, ERRORS_PROTO, run, stdout};

#[test]
fn test_check_after_generate_passes() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    run(test.generate_command())?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 catalogs against 1 proto file - all up to date

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_reports_missing_catalogs() -> Result<()> {
    let test = CliTest::with_errors_proto()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: catalog for 'en' is missing  stale-catalog
      --> ./i18n/en.toml
       = hint: run `protoglot generate` to update it

    error: catalog for 'zh' is missing  stale-catalog
      --> ./i18n/zh.toml
       = hint: run `protoglot generate` to update it

    2 catalogs are out of date. Run protoglot generate to update.

    ✘ 2 problems (2 errors, 0 warnings)

    ----- stderr -----
    ");

    // Check never writes.
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_check_reports_outdated_catalog() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    run(test.generate_command())?;

    test.write_file(
        "internal/common/xerr/errors.proto",
        &ERRORS_PROTO.replace("  USER_DISABLED = 1;\n", ""),
    )?;
    let before = test.read_file("i18n/en.toml")?;

    let output = run(test.check_command())?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("catalog for 'en' is out of date"));
    assert!(stdout(&output).contains("2 catalogs are out of date"));
    assert_eq!(test.read_file("i18n/en.toml")?, before);

    Ok(())
}

#[test]
fn test_check_only_configured_languages() -> Result<()> {
    let test = CliTest::with_errors_proto()?;

    let mut generate = test.generate_command();
    generate.args(["-L", "en"]);
    run(generate)?;

    let mut check = test.check_command();
    check.args(["-L", "en"]);
    let output = run(check)?;
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    test.write_file(".protoglotrc.json", r#"{ "languages": [] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid configuration (see .protoglotrc.json): 'languages' must contain at least one language code
    ");

    Ok(())
}
