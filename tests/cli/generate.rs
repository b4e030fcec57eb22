use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn merges_each_language_with_source_fallback() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/common.json",
        r#"{"common": {"save": "Save", "cancel": "Cancel"}}"#,
    )?;
    test.write_file(
        "translations/en/home.json",
        r#"{"home": {"title": "Welcome"}}"#,
    )?;
    test.write_file(
        "translations/es/common.json",
        r#"{"common": {"save": "Guardar"}}"#,
    )?;

    let output = test
        .generate_command()
        .args(["--input", "translations", "--output", "out/%lang.json"])
        .output()?;

    assert!(output.status.success(), "{}", stdout_of(&output));
    assert_eq!(
        test.read_json("out/en.json")?,
        json!({
            "common.save": "Save",
            "common.cancel": "Cancel",
            "home.title": "Welcome"
        })
    );
    // Missing keys fall back to the source language; overrides win.
    assert_eq!(
        test.read_json("out/es.json")?,
        json!({
            "common.save": "Guardar",
            "common.cancel": "Cancel",
            "home.title": "Welcome"
        })
    );

    Ok(())
}

#[test]
fn clashing_top_level_keys_abort_with_diagnostic() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/a.json",
        r#"{"home": {"title": "Welcome"}}"#,
    )?;
    test.write_file(
        "translations/en/b.json",
        r#"{"home": {"subtitle": "Again"}}"#,
    )?;

    let output = test
        .generate_command()
        .args(["--input", "translations", "--output", "out/%lang.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("\"home\""), "{stdout}");
    assert!(stdout.contains("a.json"), "{stdout}");
    assert!(stdout.contains("b.json"), "{stdout}");
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn template_without_placeholder_fails_before_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en/a.json", r#"{"home": {"title": "Hi"}}"#)?;

    let output = test
        .generate_command()
        .args(["--input", "translations", "--output", "out/flat.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("%lang"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn invalid_json_file_aborts_naming_the_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en/a.json", r#"{ broken "#)?;

    let output = test
        .generate_command()
        .args(["--input", "translations", "--output", "out/%lang.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("a.json"));

    Ok(())
}

#[test]
fn empty_namespace_aborts_with_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/a.json",
        r#"{"key": {"other": {}}}"#,
    )?;

    let output = test
        .generate_command()
        .args(["--input", "translations", "--output", "out/%lang.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("key.other"));

    Ok(())
}

#[test]
fn emits_type_declarations_for_the_source_language() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/bot.json",
        r#"{
  "bot": {
    "votes": "This bot {botName} has {voteCount, number} upvotes",
    "entity": "Top voted {type, select, bot {bots} server {servers} other {}}",
    "plain": "No arguments here"
  }
}"#,
    )?;

    let output = test
        .generate_command()
        .args([
            "--input",
            "translations",
            "--output",
            "out/%lang.json",
            "--declarations",
            "types/_generated.d.ts",
        ])
        .output()?;

    assert!(output.status.success(), "{}", stdout_of(&output));
    let declarations = test.read_file("types/_generated.d.ts")?;
    assert!(declarations.contains("export interface TranslationArguments"));
    assert!(
        declarations.contains("\"bot.votes\": { botName: ReactNode; voteCount: number }"),
        "{declarations}"
    );
    assert!(
        declarations.contains("\"bot.entity\": { type: \"bot\" | \"server\" }"),
        "{declarations}"
    );
    assert!(declarations.contains("\"bot.plain\": never"), "{declarations}");

    Ok(())
}

#[test]
fn redundant_tag_around_argument_fails_typings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/a.json",
        r#"{"confirm": {"delete": "Delete <b>{entityName}</b>?"}}"#,
    )?;

    let output = test
        .generate_command()
        .args([
            "--input",
            "translations",
            "--output",
            "out/%lang.json",
            "--declarations",
            "types/_generated.d.ts",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("confirm.delete"), "{stdout}");
    assert!(!test.root().join("types").exists());
    // Merged dictionaries were already written before the typings run.
    assert!(test.root().join("out/en.json").exists());

    Ok(())
}

#[test]
fn select_without_other_fails_typings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/en/a.json",
        r#"{"entity": "{type, select, bot {bots} server {servers}}"}"#,
    )?;

    let output = test
        .generate_command()
        .args([
            "--input",
            "translations",
            "--output",
            "out/%lang.json",
            "--declarations",
            "types/_generated.d.ts",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("other"), "{}", stdout_of(&output));

    Ok(())
}

#[test]
fn config_file_supplies_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingotrc.json",
        r#"{
  "translationsRoot": "i18n",
  "outputTemplate": "dist/%lang/_generated.json",
  "sourceLanguage": "de"
}"#,
    )?;
    test.write_file("i18n/de/app.json", r#"{"app": {"title": "Hallo"}}"#)?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "{}", stdout_of(&output));
    assert_eq!(
        test.read_json("dist/de/_generated.json")?,
        json!({"app.title": "Hallo"})
    );

    Ok(())
}

#[test]
fn rerun_skips_previously_generated_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en/app.json", r#"{"app": {"title": "Hi"}}"#)?;

    // Output lands inside the language directory, like the default template.
    let template = "translations/%lang/_generated.json";
    for _ in 0..2 {
        let output = test
            .generate_command()
            .args(["--input", "translations", "--output", template])
            .output()?;
        assert!(output.status.success(), "{}", stdout_of(&output));
    }

    assert_eq!(
        test.read_json("translations/en/_generated.json")?,
        json!({"app.title": "Hi"})
    );

    Ok(())
}

#[test]
fn missing_input_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .generate_command()
        .args(["--input", "nope", "--output", "out/%lang.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("generate"), "{stdout}");
    assert!(stdout.contains("init"), "{stdout}");

    Ok(())
}
