use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_lists_locales() -> Result<()> {
    let test = CliTest::with_scenario_files()?;
    test.write_file("i18n/readme.json", "{}")?;

    let mut cmd = test.locales_command();
    cmd.arg("i18n");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "i18n/file1_es-ES.json -> es-ES (translations_es-ES.json)\n\
         i18n/file2_es-ES.json -> es-ES (translations_es-ES.json)\n\
         i18n/file3_en-US.json -> en-US (translations_en-US.json)\n\
         i18n/file4_en-US.json -> en-US (translations_en-US.json)\n\
         i18n/readme.json -> no locale\n"
    );

    Ok(())
}

#[test]
fn test_lists_locales_as_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/app.de.json", "{}")?;

    let mut cmd = test.locales_command();
    cmd.args(["i18n", "--json", "--separator", ".", "--name", "bundle"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let parsed: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        parsed,
        json!([{
            "path": "i18n/app.de.json",
            "locale": "de",
            "outputFile": "bundle.de.json"
        }])
    );

    Ok(())
}

#[test]
fn test_invalid_locale_pattern() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", "{}")?;

    let mut cmd = test.locales_command();
    cmd.args(["i18n", "--locale-pattern", "(unclosed"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("invalid locale pattern"));

    Ok(())
}
