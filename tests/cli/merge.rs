use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_merges_files_by_locale() -> Result<()> {
    let test = CliTest::with_scenario_files()?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "  Wrote i18n/translations_es-ES.json\n  Wrote i18n/translations_en-US.json\n\u{2713} Merged 4 of 4 files into 2 locale files\n"
    );
    insta::assert_snapshot!(
        test.read_file("i18n/translations_es-ES.json")?,
        @r#"{"name":"Nombre","age":"Edad","family":"Familia"}"#
    );
    insta::assert_snapshot!(
        test.read_file("i18n/translations_en-US.json")?,
        @r#"{"family":"Family","friend":"Friend"}"#
    );

    Ok(())
}

#[test]
fn test_custom_output_name() -> Result<()> {
    let test = CliTest::with_scenario_files()?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n/*_es-ES.json", "--name", "locale"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("i18n/locale_es-ES.json").exists());
    assert!(!test.root().join("i18n/locale_en-US.json").exists());
    assert!(!test.root().join("i18n/translations_es-ES.json").exists());

    Ok(())
}

#[test]
fn test_out_dir_and_glob_base() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/locales/common/common_en.json", r#"{"submit": "Submit"}"#)?;
    test.write_file("src/locales/auth/auth_en.json", r#"{"signIn": "Sign in"}"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["src/locales/**/*.json", "--out-dir", "dist/i18n"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let merged: serde_json::Value =
        serde_json::from_str(&test.read_file("dist/i18n/translations_en.json")?)?;
    assert_eq!(
        merged,
        serde_json::json!({"submit": "Submit", "signIn": "Sign in"})
    );
    assert!(!test.root().join("src/locales/translations_en.json").exists());

    Ok(())
}

#[test]
fn test_deep_merge_with_indentation() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"Common": {"submit": "Submit"}}"#)?;
    test.write_file("i18n/b_en.json", r#"{"Common": {"cancel": "Cancel"}}"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--deep", "--space", "2"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("i18n/translations_en.json")?,
        "{\n  \"Common\": {\n    \"submit\": \"Submit\",\n    \"cancel\": \"Cancel\"\n  }\n}"
    );

    Ok(())
}

#[test]
fn test_shallow_merge_replaces_nested_objects() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"Common": {"submit": "Submit"}}"#)?;
    test.write_file("i18n/b_en.json", r#"{"Common": {"cancel": "Cancel"}}"#)?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    run(cmd)?;

    insta::assert_snapshot!(
        test.read_file("i18n/translations_en.json")?,
        @r#"{"Common":{"cancel":"Cancel"}}"#
    );

    Ok(())
}

#[test]
fn test_key_allow_list() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"title": "Title", "draft": "WIP", "footer": "F"}"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--key", "footer,title"]);
    run(cmd)?;

    insta::assert_snapshot!(
        test.read_file("i18n/translations_en.json")?,
        @r#"{"footer":"F","title":"Title"}"#
    );

    Ok(())
}

#[test]
fn test_custom_separator() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/messages.fr.json", r#"{"hello": "Bonjour"}"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--separator", "."]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("i18n/translations.fr.json")?,
        r#"{"hello":"Bonjour"}"#
    );

    Ok(())
}

#[test]
fn test_locale_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"a": "A"}"#)?;
    test.write_file("i18n/zh-CN.json", r#"{"a": "甲"}"#)?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--locale-pattern", r"^([a-z]{2}(?:-[A-Z]{2})?)\.json$"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(test.read_file("i18n/translations_en.json")?, r#"{"a":"A"}"#);
    assert_eq!(test.read_file("i18n/translations_zh-CN.json")?, r#"{"a":"甲"}"#);

    Ok(())
}

#[test]
fn test_skipped_files_warn() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/readme.json", r#"{"ignored": true}"#)?;
    test.write_file("i18n/list_en.json", r#"["not", "an", "object"]"#)?;
    test.write_file("i18n/ok_en.json", r#"{"ok": "OK"}"#)?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("no locale found in file name, ignoring file:"));
    assert!(output.stderr.contains("readme.json"));
    assert!(output.stderr.contains("JSON root is not an object, ignoring file:"));
    assert!(output.stderr.contains("list_en.json"));
    assert!(output.stdout.contains("Merged 1 of 3 files into 1 locale file"));
    assert!(output.stdout.contains("note: 2 files skipped"));
    assert_eq!(test.read_file("i18n/translations_en.json")?, r#"{"ok":"OK"}"#);

    Ok(())
}

#[test]
fn test_invalid_json_fails_but_keeps_other_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"a": "A"}"#)?;
    test.write_file("i18n/broken_de.json", r#"{"a": "A",,}"#)?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("error: transmerge: parsing"));
    assert!(output.stderr.contains("broken_de.json"));
    assert!(output.stdout.contains("(1 error)"));
    assert_eq!(test.read_file("i18n/translations_en.json")?, r#"{"a":"A"}"#);
    assert!(!test.root().join("i18n/translations_de.json").exists());

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_scenario_files()?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--dry-run"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Would write i18n/translations_es-ES.json"));
    assert!(!test.root().join("i18n/translations_es-ES.json").exists());

    Ok(())
}

#[test]
fn test_directories_are_recreated_under_out_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"a": "A"}"#)?;
    test.write_file("i18n/empty/.keep", "")?;

    let mut cmd = test.merge_command();
    cmd.args(["i18n", "--out-dir", "out"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("out/empty").is_dir());
    assert_eq!(test.read_file("out/translations_en.json")?, r#"{"a":"A"}"#);

    Ok(())
}

#[test]
fn test_nothing_to_merge() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/readme.json", "{}")?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("warning: no translation files merged from 1 input file")
    );

    Ok(())
}

#[test]
fn test_rerun_in_place_ignores_previous_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/a_en.json", r#"{"a": "A", "old": "X"}"#)?;

    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    insta::assert_snapshot!(
        test.read_file("i18n/translations_en.json")?,
        @r#"{"a":"A","old":"X"}"#
    );

    test.write_file("i18n/a_en.json", r#"{"a": "A"}"#)?;
    let mut cmd = test.merge_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "  Wrote i18n/translations_en.json\n\u{2713} Merged 1 of 1 file into 1 locale file\n"
    );
    insta::assert_snapshot!(
        test.read_file("i18n/translations_en.json")?,
        @r#"{"a":"A"}"#
    );

    Ok(())
}

#[test]
fn test_missing_input_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.merge_command();
    cmd.arg("missing");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Input path does not exist: missing"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("merge"));
    assert!(output.stdout.contains("locales"));

    Ok(())
}
