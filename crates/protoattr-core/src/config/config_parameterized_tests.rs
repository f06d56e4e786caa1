#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized validation tests
// ============================================================================

#[test_case("directive_prefix", "" ; "empty prefix")]
#[test_case("directive_prefix", "go: attr" ; "prefix with space")]
#[test_case("registry_file_name", "register.msg" ; "registry without go extension")]
#[test_case("registry_file_name", ".go" ; "registry with bare extension")]
#[test_case("message_import", "" ; "empty import")]
#[test_case("message_interface", "" ; "empty interface")]
fn GeneratorConfig___invalid_field___fails_validation(field: &str, value: &str) {
    let mut config = GeneratorConfig::default();
    match field {
        "directive_prefix" => config.directive_prefix = value.to_string(),
        "registry_file_name" => config.registry_file_name = value.to_string(),
        "message_import" => config.message_import = value.to_string(),
        "message_interface" => config.message_interface = value.to_string(),
        other => panic!("unexpected field {other}"),
    }

    let result = config.validate();

    assert!(matches!(result, Err(ConfigError::Invalid(ref msg)) if msg.contains(field)));
}

#[test_case(r#"formatter = "builtin""#, FormatterKind::Builtin)]
#[test_case(r#"formatter = "gofmt""#, FormatterKind::Gofmt)]
#[test_case("", FormatterKind::Builtin)]
fn GeneratorConfig___formatter_toml___parses_correctly(toml: &str, expected: FormatterKind) {
    let config = GeneratorConfig::from_str(toml).unwrap();

    assert_eq!(config.formatter, expected);
}

#[test_case(r#"log_level = "debug""#, "debug")]
#[test_case(r#"log_level = "warn""#, "warn")]
#[test_case(r#"log_level = "trace""#, "trace")]
fn GeneratorConfig___log_level_toml___parses_correctly(toml: &str, expected: &str) {
    let config = GeneratorConfig::from_str(toml).unwrap();

    assert_eq!(config.log_level, expected);
}
