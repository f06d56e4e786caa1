#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const LOGIN_SCHEMA: &str = r#"
package = "pb"

[[files]]
name = "login.proto"

[[files.messages]]
name = "LoginReq"
id = 1001
comments = """
LoginReq is sent on connect.
go:attr method="name:MsgID,in:[],out:[uint16=1001]"
"""

[[files.messages]]
name = "LoginAck"
id = "1002"
path = "4,1"
"#;

#[test]
fn Schema___from_toml___parses_files_and_messages() {
    let schema = Schema::from_toml(LOGIN_SCHEMA).unwrap();

    assert_eq!(schema.package, "pb");
    assert_eq!(schema.files.len(), 1);
    let messages = &schema.files[0].messages;
    assert_eq!(messages[0].id, Some(MessageId::Number(1001)));
    assert_eq!(messages[1].id, Some(MessageId::Text("1002".into())));
    assert!(messages[1].comments.is_empty());
}

#[test]
fn Schema___from_json___parses_same_shape() {
    let json = r#"{"package": "pb", "files": [{"name": "a.proto", "messages": [{"name": "A", "comments": "doc"}]}]}"#;

    let schema = Schema::from_json(json).unwrap();

    assert_eq!(schema.files[0].messages[0].name, "A");
    assert_eq!(schema.files[0].messages[0].id, None);
}

#[test]
fn Schema___missing_package___fails_to_parse() {
    let result = Schema::from_toml("[[files]]\nname = \"a.proto\"");

    assert!(result.is_err());
}

#[test]
fn SchemaMessage___entity___uses_default_path_and_id() {
    let schema = Schema::from_toml(LOGIN_SCHEMA).unwrap();
    let file = &schema.files[0];

    let req = file.messages[0].entity(file);
    let ack = file.messages[1].entity(file);

    assert_eq!(req.path, "login.proto/LoginReq");
    assert_eq!(req.message_id.as_deref(), Some("1001"));
    assert_eq!(ack.path, "4,1");
    assert_eq!(ack.message_id.as_deref(), Some("1002"));
}

#[test]
fn Schema___comment_index___looks_up_by_path() {
    let schema = Schema::from_toml(LOGIN_SCHEMA).unwrap();

    let index = schema.comment_index();

    assert!(index.comments_for("login.proto/LoginReq").contains("go:attr"));
    assert_eq!(index.comments_for("4,1"), "");
    assert_eq!(index.comments_for("unknown"), "");
}

#[test]
fn Schema___valid___passes_validation() {
    let schema = Schema::from_toml(LOGIN_SCHEMA).unwrap();

    assert!(schema.validate().is_ok());
}

#[test_case("" ; "empty package")]
#[test_case("my-pkg" ; "dash in package")]
#[test_case("1pb" ; "leading digit")]
fn Schema___invalid_package___fails_validation(package: &str) {
    let schema = Schema {
        package: package.to_string(),
        files: Vec::new(),
    };

    assert!(schema.validate().is_err());
}

#[test]
fn Schema___invalid_message_name___fails_validation() {
    let schema = Schema {
        package: "pb".into(),
        files: vec![SchemaFile {
            name: "a.proto".into(),
            messages: vec![SchemaMessage {
                name: "Bad Name".into(),
                path: None,
                id: None,
                comments: String::new(),
            }],
        }],
    };

    let err = schema.validate().unwrap_err();

    assert!(err.to_string().contains("a.proto"));
}

#[test_case(MessageId::Number(7), "7")]
#[test_case(MessageId::Text("0x10".into()), "0x10")]
fn MessageId___display___renders_raw_value(id: MessageId, expected: &str) {
    assert_eq!(id.to_string(), expected);
}
