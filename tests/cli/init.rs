use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .protoglotrc.json

    ----- stderr -----
    ");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".protoglotrc.json")?)?;
    assert_eq!(config["protoPattern"], "internal/common/xerr/errors.proto");
    assert_eq!(config["outputDir"], "./i18n/");
    assert_eq!(config["languages"], serde_json::json!(["en", "zh"]));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".protoglotrc.json", r#"{ "languages": ["fr"] }"#)?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: .protoglotrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(
        test.read_file(".protoglotrc.json")?,
        r#"{ "languages": ["fr"] }"#
    );

    Ok(())
}

#[test]
fn test_init_config_drives_generate() -> Result<()> {
    let test = CliTest::with_file(
        "internal/common/xerr/errors.proto",
        "syntax = \"proto3\";\nenum Code { CODE_OK = 0; }\n",
    )?;
    run(test.init_command())?;

    let output = run(test.generate_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("i18n/en.toml").exists());
    assert!(test.root().join("i18n/zh.toml").exists());

    Ok(())
}
