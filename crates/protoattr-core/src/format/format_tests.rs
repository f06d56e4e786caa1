#![allow(non_snake_case)]

use super::*;

fn fmt(source: &str) -> Result<String, FormatError> {
    BuiltinFormatter.format(source)
}

#[test]
fn BuiltinFormatter___nested_blocks___indents_with_tabs() {
    let source = "func f() {\nif ok {\nreturn 1\n}\nreturn 0\n}\n";

    let out = fmt(source).unwrap();

    assert_eq!(out, "func f() {\n\tif ok {\n\t\treturn 1\n\t}\n\treturn 0\n}\n");
}

#[test]
fn BuiltinFormatter___existing_indentation___is_normalized() {
    let source = "var m = map[uint16]int{\n        uint16(1): 1,   \n}\n";

    let out = fmt(source).unwrap();

    assert_eq!(out, "var m = map[uint16]int{\n\tuint16(1): 1,\n}\n");
}

#[test]
fn BuiltinFormatter___blank_line_runs___collapse_to_one() {
    let source = "\n\npackage pb\n\n\n\nimport \"fmt\"\n\n\n";

    let out = fmt(source).unwrap();

    assert_eq!(out, "package pb\n\nimport \"fmt\"\n");
}

#[test]
fn BuiltinFormatter___braces_inside_strings_and_comments___are_ignored() {
    let source = "func f() string {\n// closing } here\nreturn \"{(\" + `[`\n}\n";

    let out = fmt(source).unwrap();

    assert_eq!(
        out,
        "func f() string {\n\t// closing } here\n\treturn \"{(\" + `[`\n}\n"
    );
}

#[test]
fn BuiltinFormatter___escaped_quote___stays_inside_string() {
    let out = fmt("x := \"a\\\"{\"\n").unwrap();

    assert_eq!(out, "x := \"a\\\"{\"\n");
}

#[test]
fn BuiltinFormatter___multiline_raw_string___kept_verbatim() {
    let source = "const s = `\n   {raw\n`\n";

    let out = fmt(source).unwrap();

    assert_eq!(out, "const s = `\n   {raw\n`\n");
}

#[test]
fn BuiltinFormatter___block_comment___skipped() {
    let out = fmt("/* { */\nvar x = 1\n").unwrap();

    assert_eq!(out, "/* { */\nvar x = 1\n");
}

#[test]
fn BuiltinFormatter___unclosed_brace___returns_error() {
    let err = fmt("func f() {\nreturn\n").unwrap_err();

    assert_eq!(err, FormatError::Unclosed { open: '{', line: 1 });
}

#[test]
fn BuiltinFormatter___stray_closer___returns_error() {
    let err = fmt("return 1\n}\n").unwrap_err();

    assert_eq!(err, FormatError::UnexpectedClose { found: '}', line: 2 });
}

#[test]
fn BuiltinFormatter___mismatched_closer___returns_error() {
    let err = fmt("f(x]\n").unwrap_err();

    assert_eq!(
        err,
        FormatError::Mismatched {
            found: ']',
            expected: ')',
            line: 1,
        }
    );
}

#[test]
fn BuiltinFormatter___unterminated_string___returns_error() {
    let err = fmt("x := \"open\n").unwrap_err();

    assert_eq!(
        err,
        FormatError::Unterminated {
            what: "string",
            line: 1,
        }
    );
}

#[test]
fn BuiltinFormatter___unterminated_block_comment___returns_error() {
    let err = fmt("/* never closed\nvar x = 1\n").unwrap_err();

    assert!(matches!(err, FormatError::Unterminated { what: "block comment", line: 1 }));
}

#[test]
fn BuiltinFormatter___formatting_twice___is_stable() {
    let once = fmt("func f() {\n  return\n}\n").unwrap();

    let twice = fmt(&once).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn GofmtFormatter___missing_program___returns_external_error() {
    let formatter = GofmtFormatter::new("/nonexistent/protoattr-gofmt");

    let err = formatter.format("package pb\n").unwrap_err();

    assert!(matches!(err, FormatError::External(ref msg) if msg.contains("failed to run")));
}
