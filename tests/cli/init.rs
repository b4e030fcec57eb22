use anyhow::Result;

use crate::CliTest;

#[test]
fn creates_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    let config: serde_json::Value = serde_json::from_str(&test.read_file(".lingotrc.json")?)?;
    assert_eq!(config["sourceLanguage"], "en");
    assert_eq!(
        config["outputTemplate"],
        "./translations/%lang/_generated.json"
    );

    Ok(())
}

#[test]
fn refuses_to_overwrite_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingotrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("already exists"),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));

    Ok(())
}
