//! Go source emission for method descriptors

use crate::host::CodeSink;
use crate::method::{MethodDescriptor, Parameter};

/// Render `method` as a Go method on `*type_name`.
///
/// The output ends with a newline and depends only on its arguments.
pub fn render_method(type_name: &str, method: &MethodDescriptor) -> String {
    let ins = method
        .ins
        .iter()
        .map(|p| format!("{} {}", p.value, p.ty))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "func (m *{type_name}) {}({ins}){} {{\n{}\n}}\n",
        method.name,
        render_results(&method.outs),
        render_return(&method.outs),
    )
}

/// Write `method` to `sink`.
pub fn emit_method(sink: &mut dyn CodeSink, type_name: &str, method: &MethodDescriptor) {
    sink.emit(&render_method(type_name, method));
}

/// Result clause including its leading space; empty for no outputs.
fn render_results(outs: &[Parameter]) -> String {
    match outs {
        [] => String::new(),
        [single] => format!(" {}", single.ty),
        many => {
            let types: Vec<_> = many.iter().map(|p| p.ty.as_str()).collect();
            format!(" ({})", types.join(", "))
        }
    }
}

fn render_return(outs: &[Parameter]) -> String {
    if outs.is_empty() {
        return "return".to_string();
    }
    let values: Vec<_> = outs.iter().map(|p| p.value.as_str()).collect();
    format!("return {}", values.join(", "))
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
