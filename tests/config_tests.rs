use std::path::Path;

use clap::Parser;
use figment::Jail;
use paramedit::cli::Cli;
use paramedit::config::{FormConfig, Settings};
use paramedit::export::OutputFormat;
use paramedit::model::{Color, ParamValue, Parameter};

const FORM_TOML: &str = r#"
[output]
format = "yaml"

[[form.params]]
id = 3
name = "Size"
type = "string"

[[form.params]]
id = 4
name = "Fabric"

[form.model]
colors = ["red", "white"]

[[form.model.paramValues]]
paramId = 4
value = "linen"
"#;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert!(settings.form.params.is_empty());
    assert_eq!(settings.output.format, OutputFormat::Json);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_demo_form_used_when_no_params() {
    let form = Settings::default().form_or_demo();
    assert_eq!(form, FormConfig::demo());
    assert_eq!(form.params[0].name, "Purpose");
    assert_eq!(form.model.param_values[1], ParamValue::new(2, "maxi"));
}

#[test]
fn test_layered_file_settings() {
    Jail::expect_with(|jail| {
        jail.create_file("paramedit.toml", FORM_TOML)?;

        let settings = Settings::from_figment(&Settings::figment(Some(Path::new(
            "paramedit.toml",
        ))))
        .unwrap();

        assert_eq!(settings.output.format, OutputFormat::Yaml);
        assert_eq!(
            settings.form.params,
            vec![Parameter::new(3, "Size"), Parameter::new(4, "Fabric")]
        );
        assert_eq!(
            settings.form.model.param_values,
            vec![ParamValue::new(4, "linen")]
        );
        assert_eq!(settings.form.model.colors, vec![Color::Red, Color::White]);
        assert_eq!(settings.form_or_demo(), settings.form);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("paramedit.toml", FORM_TOML)?;
        jail.set_env("PARAMEDIT_OUTPUT__FORMAT", "json");
        jail.set_env("PARAMEDIT_LOGGING__LEVEL", "debug");

        let settings = Settings::from_figment(&Settings::figment(Some(Path::new(
            "paramedit.toml",
        ))))
        .unwrap();

        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_cli_overrides_env() {
    Jail::expect_with(|jail| {
        jail.set_env("PARAMEDIT_OUTPUT__FORMAT", "json");

        let cli = Cli::try_parse_from(["paramedit", "--format", "yaml", "--output", "out.yaml"])
            .unwrap();
        let figment = Settings::figment(None).merge(cli.to_config_overrides());
        let settings = Settings::from_figment(&figment).unwrap();

        assert_eq!(settings.output.format, OutputFormat::Yaml);
        assert_eq!(
            settings.output.path.as_deref(),
            Some(Path::new("out.yaml"))
        );
        // Unset flags leave lower layers alone
        assert_eq!(settings.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_unknown_param_type_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "bad.toml",
            r#"
[[form.params]]
id = 1
name = "Count"
type = "number"
"#,
        )?;

        let result = Settings::from_figment(&Settings::figment(Some(Path::new("bad.toml"))));
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_form_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.toml");

    let mut form = FormConfig::demo();
    form.model.colors.push(Color::Purple);
    form.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[params]]"));
    assert!(content.contains("name = \"Purpose\""));

    let restored = FormConfig::load(&path).unwrap();
    assert_eq!(restored, form);
}

#[test]
fn test_load_missing_form_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = FormConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
