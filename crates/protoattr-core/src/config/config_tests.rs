#![allow(non_snake_case)]

use super::*;

#[test]
fn GeneratorConfig___default___has_expected_values() {
    let config = GeneratorConfig::default();

    assert_eq!(config.directive_prefix, "go:attr");
    assert_eq!(config.registry_file_name, "register.msg.go");
    assert_eq!(config.message_import, "github.com/gogo/protobuf/proto");
    assert_eq!(config.message_interface, "proto.Message");
    assert_eq!(config.formatter, FormatterKind::Builtin);
    assert_eq!(config.log_level, "info");
}

#[test]
fn GeneratorConfig___from_empty_string___returns_defaults() {
    let config = GeneratorConfig::from_str("").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_str___overrides_given_fields() {
    let toml = r#"
directive_prefix = "@gen"
registry_file_name = "msgid.go"
formatter = "gofmt"
"#;

    let config = GeneratorConfig::from_str(toml).unwrap();

    assert_eq!(config.directive_prefix, "@gen");
    assert_eq!(config.registry_file_name, "msgid.go");
    assert_eq!(config.formatter, FormatterKind::Gofmt);
    assert_eq!(config.message_interface, "proto.Message");
}

#[test]
fn GeneratorConfig___unknown_formatter___returns_parse_error() {
    let result = GeneratorConfig::from_str(r#"formatter = "clang""#);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn GeneratorConfig___to_toml___roundtrips() {
    let config = GeneratorConfig {
        directive_prefix: "@gen".into(),
        ..Default::default()
    };

    let toml = config.to_toml().unwrap();
    let parsed = GeneratorConfig::from_str(&toml).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn GeneratorConfig___from_missing_file___returns_io_error() {
    let result = GeneratorConfig::from_file("/nonexistent/protoattr.toml");

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn GeneratorConfig___default___validates() {
    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test]
fn FormatterKind___build_builtin___formats_source() {
    let formatter = FormatterKind::Builtin.build();

    let out = formatter.format("func f() {\nreturn\n}").unwrap();

    assert_eq!(out, "func f() {\n\treturn\n}\n");
}
