// tests/integration_tests/config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use pretty_assertions::assert_eq;
use snp::Config;
use snp::config::ConfigError;
use snp::export::ExportFormat;

#[test]
fn test_missing_value_equals_explicit_default() -> Result<()> {
    let implicit = Config::from_toml_str("[analysis]\ninclude_stop_words = false\n")?;
    let explicit = Config::from_toml_str(
        "[analysis]\ninclude_stop_words = false\nword_frequency_top_n = 20\n",
    )?;
    assert_eq!(implicit, explicit);
    assert_eq!(implicit, Config::default());
    Ok(())
}

#[test]
fn test_load_each_format() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_test_file(temp_dir.path(), "a.toml", "[export]\ndefault_format = \"csv\"\n")?;
    create_test_file(temp_dir.path(), "b.yaml", "export:\n  default_format: csv\n")?;
    create_test_file(temp_dir.path(), "c.json", r#"{"export": {"default_format": "csv"}}"#)?;

    for name in ["a.toml", "b.yaml", "c.json"] {
        let config = Config::load(&temp_dir.path().join(name))?;
        assert_eq!(config.export.default_format, ExportFormat::Csv, "{name}");
    }
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = Config::from_toml_str("[analysis]\nword_frequency_top_n = 0\n");
    assert!(matches!(
        err,
        Err(ConfigError::InvalidValue {
            key: "word_frequency_top_n",
            ..
        })
    ));

    let err = Config::from_toml_str("[export]\ndefault_format = \"xml\"\n");
    assert!(matches!(
        err,
        Err(ConfigError::InvalidValue {
            key: "default_format",
            ..
        })
    ));
}

#[test]
fn test_init_config_round_trip() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join(".snp.toml");
    Config::default().write_to(&path)?;

    assert_eq!(Config::discover(temp_dir.path())?, Config::default());
    Ok(())
}
