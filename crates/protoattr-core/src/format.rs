//! Formatting pass over generated Go source
//!
//! Generated files are passed through a [`SourceFormatter`] before they are
//! handed back to the host. [`BuiltinFormatter`] checks delimiter balance and
//! re-indents by brace depth; [`GofmtFormatter`] shells out to `gofmt`.

use crate::error::FormatError;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Reformats a complete source unit.
pub trait SourceFormatter: Send + Sync {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Dependency-free formatter for generated code.
///
/// Rejects unbalanced `()[]{}` and unterminated literals or block comments.
/// Lines are trimmed and re-indented with one tab per open delimiter, runs
/// of blank lines collapse to one, and the result ends with a single
/// newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    /// Inside a `/* */` comment opened on the given line.
    BlockComment(usize),
    /// Inside a raw string literal opened on the given line.
    RawString(usize),
}

impl SourceFormatter for BuiltinFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut out = String::with_capacity(source.len());
        let mut stack: Vec<(char, usize)> = Vec::new();
        let mut state = Scan::Code;
        let mut blank_run = false;

        for (idx, raw_line) in source.lines().enumerate() {
            let line_no = idx + 1;

            if state != Scan::Code {
                // continuation of a multi-line comment or raw string stays verbatim
                out.push_str(raw_line);
                out.push('\n');
                state = scan_line(raw_line, line_no, state, &mut stack)?;
                blank_run = false;
                continue;
            }

            let line = raw_line.trim();
            if line.is_empty() {
                if !out.is_empty() && !blank_run {
                    out.push('\n');
                }
                blank_run = true;
                continue;
            }
            blank_run = false;

            let leading_closers = line.chars().take_while(|c| is_closer(*c)).count();
            let depth = stack.len().saturating_sub(leading_closers);
            for _ in 0..depth {
                out.push('\t');
            }
            out.push_str(line);
            out.push('\n');

            state = scan_line(line, line_no, state, &mut stack)?;
        }

        match state {
            Scan::Code => {}
            Scan::BlockComment(line) => {
                return Err(FormatError::Unterminated {
                    what: "block comment",
                    line,
                });
            }
            Scan::RawString(line) => {
                return Err(FormatError::Unterminated {
                    what: "raw string",
                    line,
                });
            }
        }
        if let Some((open, line)) = stack.pop() {
            return Err(FormatError::Unclosed { open, line });
        }

        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out)
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

fn opener_for(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

/// Advance the delimiter stack and literal state across one line.
fn scan_line(
    line: &str,
    line_no: usize,
    mut state: Scan,
    stack: &mut Vec<(char, usize)>,
) -> Result<Scan, FormatError> {
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Scan::BlockComment(_) => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Scan::Code;
                }
            }
            Scan::RawString(_) => {
                if c == '`' {
                    state = Scan::Code;
                }
            }
            Scan::Code => match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Scan::BlockComment(line_no);
                }
                '`' => state = Scan::RawString(line_no),
                '"' | '\'' => {
                    let what = if c == '"' { "string" } else { "rune literal" };
                    let mut closed = false;
                    while let Some(inner) = chars.next() {
                        if inner == '\\' {
                            chars.next();
                        } else if inner == c {
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(FormatError::Unterminated {
                            what,
                            line: line_no,
                        });
                    }
                }
                '(' | '[' | '{' => stack.push((c, line_no)),
                ')' | ']' | '}' => match stack.pop() {
                    Some((open, _)) if open == opener_for(c) => {}
                    Some((open, _)) => {
                        return Err(FormatError::Mismatched {
                            found: c,
                            expected: closer_for(open),
                            line: line_no,
                        });
                    }
                    None => {
                        return Err(FormatError::UnexpectedClose {
                            found: c,
                            line: line_no,
                        });
                    }
                },
                _ => {}
            },
        }
    }

    Ok(state)
}

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Formatter backed by an external `gofmt` executable.
#[derive(Debug, Clone)]
pub struct GofmtFormatter {
    program: PathBuf,
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        Self::new("gofmt")
    }
}

impl GofmtFormatter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SourceFormatter for GofmtFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                FormatError::External(format!("failed to run {}: {e}", self.program.display()))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| FormatError::External(format!("failed to write source: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| FormatError::External(format!("failed to wait for formatter: {e}")))?;

        if !output.status.success() {
            return Err(FormatError::External(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| FormatError::External(format!("formatter produced invalid UTF-8: {e}")))
    }
}

#[cfg(test)]
#[path = "format/format_tests.rs"]
mod format_tests;
