#![allow(non_snake_case)]

use super::*;

#[test]
fn DirectiveError___unknown_key___names_key_and_line() {
    let err = DirectiveError::UnknownDirectiveKey {
        key: "getter".into(),
        line: "go:attr getter=x".into(),
    };

    let display = err.to_string();

    assert_eq!(display, "unknown directive key `getter` in `go:attr getter=x`");
}

#[test]
fn DirectiveError___method_field___names_field() {
    let err = DirectiveError::MethodFieldError {
        field: "args".into(),
        line: "go:attr method=\"args:[]\"".into(),
    };

    assert!(err.to_string().contains("unknown method field `args`"));
}

#[test]
fn GenerateError___directive___includes_entity() {
    let err = GenerateError::directive(
        "LoginReq",
        DirectiveError::UnquotedMethodValue {
            found: "n".into(),
            line: "go:attr method=name:X".into(),
        },
    );

    let display = err.to_string();

    assert!(display.starts_with("directive error on LoginReq:"));
    assert!(display.contains("not a quoted string"));
}

#[test]
fn GenerateError___from_registry_error___is_transparent() {
    let err: GenerateError = RegistryError::InvalidMessageId {
        id: "70000".into(),
        name: "Foo".into(),
    }
    .into();

    assert_eq!(err.to_string(), "message id `70000` of `Foo` is not a valid uint16");
}

#[test]
fn RegistryError___format___names_artifact() {
    let err = RegistryError::Format {
        artifact: "register.msg.go".into(),
        source: FormatError::Unclosed { open: '{', line: 3 },
    };

    assert_eq!(
        err.to_string(),
        "format register.msg.go error: unclosed `{` opened at line 3"
    );
}

#[test]
fn ConfigError___from_toml_error___converts_to_parse() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();

    let err: ConfigError = toml_err.into();

    assert!(matches!(err, ConfigError::Parse(_)));
}
