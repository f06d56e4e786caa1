#![allow(non_snake_case)]

use super::*;

fn descriptor(name: &str, ins: &[(&str, &str)], outs: &[(&str, &str)]) -> MethodDescriptor {
    MethodDescriptor {
        name: name.to_string(),
        ins: ins.iter().map(|(t, v)| Parameter::new(*t, *v)).collect(),
        outs: outs.iter().map(|(t, v)| Parameter::new(*t, *v)).collect(),
    }
}

#[test]
fn render_method___single_output___uses_bare_type() {
    let desc = descriptor("GetX", &[], &[("int", "42")]);

    let code = render_method("Foo", &desc);

    assert_eq!(code, "func (m *Foo) GetX() int {\nreturn 42\n}\n");
}

#[test]
fn render_method___two_outputs___parenthesizes_types() {
    let desc = descriptor(
        "Check",
        &[("string", "s"), ("int", "n")],
        &[("bool", "true"), ("error", "nil")],
    );

    let code = render_method("Foo", &desc);

    assert_eq!(
        code,
        "func (m *Foo) Check(s string, n int) (bool, error) {\nreturn true, nil\n}\n"
    );
}

#[test]
fn render_method___no_outputs___omits_result_and_returns_bare() {
    let desc = descriptor("Touch", &[("int64", "at")], &[]);

    let code = render_method("Session", &desc);

    assert_eq!(code, "func (m *Session) Touch(at int64) {\nreturn\n}\n");
}

#[test]
fn render_method___three_outputs___preserves_order() {
    let desc = descriptor(
        "Triple",
        &[],
        &[("int", "1"), ("string", "\"two\""), ("error", "nil")],
    );

    let code = render_method("T", &desc);

    assert!(code.starts_with("func (m *T) Triple() (int, string, error) {\n"));
    assert!(code.contains("\nreturn 1, \"two\", nil\n"));
}

#[test]
fn render_method___same_input___is_byte_identical() {
    let desc = descriptor("MsgID", &[], &[("uint16", "1001")]);

    assert_eq!(render_method("LoginReq", &desc), render_method("LoginReq", &desc));
}

#[test]
fn emit_method___appends_to_sink() {
    let desc = descriptor("GetX", &[], &[("int", "42")]);
    let mut sink = String::from("// header\n");

    emit_method(&mut sink, "Foo", &desc);

    assert_eq!(sink, "// header\nfunc (m *Foo) GetX() int {\nreturn 42\n}\n");
}
