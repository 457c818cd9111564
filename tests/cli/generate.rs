use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, ERRORS_PROTO, run, stderr, stdout};

const EXPECTED_CATALOG: &str = r#"[USER_NOT_FOUND]
other = ""

[USER_DISABLED]
other = ""

[ORDER_EXPIRED]
other = ""

[name_required]
other = "name is required"

[email_format]
other = ""

"#;

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = CliTest::with_errors_proto()?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ ./i18n/en.toml created (5 keys)
    ✓ ./i18n/zh.toml created (5 keys)
    Scanned 1 proto file, 5 keys; wrote 2 catalogs to ./i18n/

    ----- stderr -----
    ");

    assert_eq!(test.read_file("i18n/en.toml")?, EXPECTED_CATALOG);
    assert_eq!(test.read_file("i18n/zh.toml")?, EXPECTED_CATALOG);

    Ok(())
}

#[test]
fn test_generate_preserves_translations() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    test.write_file(
        "i18n/zh.toml",
        r#"[USER_NOT_FOUND]
other = "用户不存在"

[name_required]
other = "名称必填"

[REMOVED_KEY]
other = "stale"

"#,
    )?;

    let mut cmd = test.generate_command();
    cmd.args(["-L", "zh"]);
    let output = run(cmd)?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let zh = test.read_file("i18n/zh.toml")?;
    assert!(zh.starts_with("[USER_NOT_FOUND]\nother = \"用户不存在\"\n\n[USER_DISABLED]\nother = \"\"\n\n"));
    assert!(zh.contains("[name_required]\nother = \"名称必填\"\n\n"));
    assert!(!zh.contains("REMOVED_KEY"));
    assert!(!test.root().join("i18n/en.toml").exists());

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_errors_proto()?;

    run(test.generate_command())?;
    let first = test.read_file("i18n/en.toml")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Scanned 1 proto file, 5 keys; wrote 2 catalogs to ./i18n/ (2 unchanged)

    ----- stderr -----
    ");
    assert_eq!(test.read_file("i18n/en.toml")?, first);

    Ok(())
}

#[test]
fn test_generate_keeps_escaped_quotes_stable() -> Result<()> {
    let test = CliTest::with_file(
        "internal/common/xerr/errors.proto",
        r#"syntax = "proto3";

message Request {
  string kind = 1 [(buf.validate.field).cel = {
    id: "kind_value"
    message: "must be \"x\""
    expression: "this == 'x'"
  }];
}
"#,
    )?;

    let mut generate = test.generate_command();
    generate.args(["-L", "en"]);
    run(generate)?;
    assert_eq!(
        test.read_file("i18n/en.toml")?,
        "[kind_value]\nother = \"must be \\\"x\\\"\"\n\n"
    );

    let mut check = test.check_command();
    check.args(["-L", "en"]);
    let output = run(check)?;
    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));

    Ok(())
}

#[test]
fn test_generate_appends_new_key() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    run(test.generate_command())?;

    test.write_file(
        "internal/common/xerr/errors.proto",
        &ERRORS_PROTO.replace(
            "  ORDER_EXPIRED = 0;\n",
            "  ORDER_EXPIRED = 0;\n  ORDER_PAID = 1;\n",
        ),
    )?;

    let output = run(test.generate_command())?;
    assert_eq!(output.status.code(), Some(0));

    let en = test.read_file("i18n/en.toml")?;
    assert!(en.contains("[ORDER_EXPIRED]\nother = \"\"\n\n[ORDER_PAID]\nother = \"\"\n\n[name_required]"));
    assert!(stdout(&output).contains("en.toml updated (6 keys)"));

    Ok(())
}

#[test]
fn test_generate_with_suffix_filter() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    test.write_file(
        "internal/common/xerr/status.proto",
        "syntax = \"proto3\";\nenum UserStatus { USER_ACTIVE = 0; }\n",
    )?;

    let mut cmd = test.generate_command();
    cmd.args(["--suffix", "Error", "-L", "en"]);
    let output = run(cmd)?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let en = test.read_file("i18n/en.toml")?;
    assert!(en.contains("[USER_NOT_FOUND]"));
    assert!(!en.contains("USER_ACTIVE"));
    // Validation rules are not affected by the enum filters.
    assert!(en.contains("[name_required]"));

    Ok(())
}

#[test]
fn test_generate_reads_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "api/errors.proto",
        "syntax = \"proto3\";\nenum Code { CODE_OK = 0; }\n",
    )?;
    test.write_file(
        ".protoglotrc.json",
        r#"{ "protoPattern": "api/*.proto", "outputDir": "locales", "languages": ["ja"] }"#,
    )?;

    let output = run(test.generate_command())?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        test.read_file("locales/ja.toml")?,
        "[CODE_OK]\nother = \"\"\n\n"
    );

    Ok(())
}

#[test]
fn test_generate_skips_unparsable_file() -> Result<()> {
    let test = CliTest::with_errors_proto()?;
    test.write_file("internal/common/xerr/broken.proto", "enum Broken {")?;

    let mut cmd = test.generate_command();
    cmd.args(["-L", "en"]);

    insta::with_settings!({
        filters => vec![(
            r"(Failed to parse proto file: \S+?\.proto): .*  parse-error",
            "$1: [PARSE ERROR]  parse-error",
        )],
    }, {
        assert_cmd_snapshot!(cmd, @r"
        success: true
        exit_code: 0
        ----- stdout -----
        warning: Failed to parse proto file: internal/common/xerr/broken.proto: [PARSE ERROR]  parse-error
          --> internal/common/xerr/broken.proto
           = note: keys from this file were skipped

        ✓ ./i18n/en.toml created (5 keys)
        Scanned 2 proto files, 5 keys; wrote 1 catalog to ./i18n/

        ✘ 1 problem (0 errors, 1 warning)

        ----- stderr -----
        ");
    });

    assert_eq!(test.read_file("i18n/en.toml")?, EXPECTED_CATALOG);

    Ok(())
}

#[test]
fn test_generate_without_proto_files_fails() -> Result<()> {
    let test = CliTest::with_file("internal/common/xerr/README.md", "# errors")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No proto files found in directory: internal/common/xerr
    ");
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_generate_without_keys_fails() -> Result<()> {
    let test = CliTest::with_file(
        "internal/common/xerr/errors.proto",
        "syntax = \"proto3\";\nmessage Empty {}\n",
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No keys found in any proto files
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("generate"));

    Ok(())
}
