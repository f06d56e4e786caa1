//! `method` directive grammar
//!
//! The value of a `method=` pair is a double-quoted, comma-separated list of
//! fields:
//!
//! ```text
//! method="name:GetX,in:[string=s,int=n],out:[bool=true,error=nil]"
//! ```
//!
//! `name` is the Go method name; `in` and `out` are bracketed lists of
//! `type=value` entries. Inputs use the value as the parameter name and
//! outputs use it as the returned expression. Entries that are not exactly
//! one `type=value` pair are dropped without a diagnostic.

use crate::error::DirectiveError;
use crate::lexer::Lexer;
use std::collections::HashMap;
use std::fmt;

/// One parameter or return slot of a synthesized method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Go type used in the signature.
    pub ty: String,

    /// Parameter name for inputs, returned expression for outputs.
    pub value: String,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            value: value.into(),
        }
    }

    /// Parse a single `type=value` list entry.
    ///
    /// Returns `None` unless the entry holds exactly one `=` with text on
    /// both sides.
    pub fn parse(entry: &str) -> Option<Self> {
        let mut parts = entry.split('=');
        let (Some(ty), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };
        let (ty, value) = (ty.trim(), value.trim());
        if ty.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self::new(ty, value))
    }
}

/// Parsed form of one `method` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub ins: Vec<Parameter>,
    pub outs: Vec<Parameter>,
}

/// Parses the value of one method field into the descriptor.
///
/// Called with the lexer positioned just after `key:`.
pub type FieldHandler = fn(&mut Lexer<'_>, &mut MethodDescriptor) -> Result<(), DirectiveError>;

/// Field dispatch table for the `method` value grammar.
#[derive(Clone)]
pub struct MethodGrammar {
    fields: HashMap<&'static str, FieldHandler>,
}

impl Default for MethodGrammar {
    fn default() -> Self {
        Self::empty()
            .with_field("name", parse_name)
            .with_field("in", parse_ins)
            .with_field("out", parse_outs)
    }
}

impl fmt::Debug for MethodGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.fields.keys().collect();
        keys.sort();
        f.debug_struct("MethodGrammar").field("fields", &keys).finish()
    }
}

impl MethodGrammar {
    /// A grammar that accepts no fields at all.
    pub fn empty() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Register (or replace) the handler for `key`.
    pub fn with_field(mut self, key: &'static str, handler: FieldHandler) -> Self {
        self.fields.insert(key, handler);
        self
    }

    /// Whether `key` has a handler.
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Parse a quoted method value starting at the lexer's scan position.
    ///
    /// On return the lexer is committed past the closing quote and any
    /// trailing whitespace.
    pub fn parse(&self, lx: &mut Lexer<'_>) -> Result<MethodDescriptor, DirectiveError> {
        match lx.next_rune() {
            Some('"') => {}
            other => {
                return Err(DirectiveError::UnquotedMethodValue {
                    found: other.map(String::from).unwrap_or_default(),
                    line: lx.line().to_string(),
                });
            }
        }
        lx.commit();
        lx.skip_while(&[]);

        let mut desc = MethodDescriptor::default();
        while !lx.at_end() {
            if lx.next_rune() == Some('"') {
                break;
            }
            lx.rewind();

            let key = lx.take_word(&[':']);
            lx.skip_while(&[':']);
            let handler =
                self.fields
                    .get(key)
                    .ok_or_else(|| DirectiveError::MethodFieldError {
                        field: key.to_string(),
                        line: lx.line().to_string(),
                    })?;
            handler(lx, &mut desc)?;
            lx.skip_while(&[',']);
        }
        lx.skip_while(&['"']);

        Ok(desc)
    }
}

fn parse_name(lx: &mut Lexer<'_>, desc: &mut MethodDescriptor) -> Result<(), DirectiveError> {
    desc.name = lx.take_word(&[',', '"']).to_string();
    Ok(())
}

fn parse_ins(lx: &mut Lexer<'_>, desc: &mut MethodDescriptor) -> Result<(), DirectiveError> {
    desc.ins = parse_param_list(lx)?;
    Ok(())
}

fn parse_outs(lx: &mut Lexer<'_>, desc: &mut MethodDescriptor) -> Result<(), DirectiveError> {
    desc.outs = parse_param_list(lx)?;
    Ok(())
}

/// Parse a bracketed `[type=value,...]` list.
///
/// The list body is everything up to the first `]`; nested brackets are not
/// supported. Malformed entries are skipped.
// TODO: report dropped entries as warnings once directive diagnostics carry a span
pub fn parse_param_list(lx: &mut Lexer<'_>) -> Result<Vec<Parameter>, DirectiveError> {
    match lx.next_rune() {
        Some('[') => {}
        other => {
            return Err(DirectiveError::MalformedParamList {
                reason: match other {
                    Some(c) => format!("expected `[`, found `{c}`"),
                    None => "expected `[`, found end of line".to_string(),
                },
                line: lx.line().to_string(),
            });
        }
    }
    lx.skip_while(&['[']);

    loop {
        match lx.next_rune() {
            Some(']') => {
                lx.rewind();
                break;
            }
            Some(_) => {}
            None => {
                return Err(DirectiveError::MalformedParamList {
                    reason: "missing closing `]`".to_string(),
                    line: lx.line().to_string(),
                });
            }
        }
    }

    let params = lx.pending().split(',').filter_map(Parameter::parse).collect();
    lx.skip_while(&[']']);

    Ok(params)
}
