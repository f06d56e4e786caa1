//! Directive lines and top-level key dispatch
//!
//! A directive is a comment line that starts with the directive keyword
//! (`go:attr` by default) followed by whitespace-separated `key=value`
//! pairs:
//!
//! ```text
//! go:attr method="name:GetX,in:[],out:[int=42]"
//! ```
//!
//! Each key is looked up in a handler table. The parser ships with a
//! handler for `method`; hosts add new directive kinds with
//! [`DirectiveParser::with_handler`].

use crate::error::DirectiveError;
use crate::lexer::Lexer;
use crate::method::{MethodDescriptor, MethodGrammar};
use std::collections::HashMap;
use std::fmt;

/// Default keyword that opens a directive line.
pub const DEFAULT_PREFIX: &str = "go:attr";

/// One parsed `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Directive {
    /// `method="..."`: synthesize a method on the owning type.
    Method(MethodDescriptor),
}

/// Parses the value of a top-level key.
///
/// Called with the lexer positioned just after `key=`; must leave the lexer
/// committed past the value.
///
/// The key and its `=` are committed before the handler runs, so a handler
/// that consumes nothing leaves the rest of the line to be read as the next
/// key.
pub type DirectiveHandler =
    Box<dyn Fn(&mut Lexer<'_>) -> Result<Directive, DirectiveError> + Send + Sync>;

/// Parser for whole directive lines.
pub struct DirectiveParser {
    prefix: String,
    handlers: HashMap<String, DirectiveHandler>,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl fmt::Debug for DirectiveParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort();
        f.debug_struct("DirectiveParser")
            .field("prefix", &self.prefix)
            .field("handlers", &keys)
            .finish()
    }
}

impl DirectiveParser {
    /// Create a parser for `prefix` with the built-in `method` handler.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_method_grammar(prefix, MethodGrammar::default())
    }

    /// Create a parser whose `method` handler uses `grammar`.
    pub fn with_method_grammar(prefix: impl Into<String>, grammar: MethodGrammar) -> Self {
        Self {
            prefix: prefix.into(),
            handlers: HashMap::new(),
        }
        .with_handler("method", move |lx| grammar.parse(lx).map(Directive::Method))
    }

    /// Register (or replace) the handler for `key`.
    pub fn with_handler<F>(mut self, key: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Lexer<'_>) -> Result<Directive, DirectiveError> + Send + Sync + 'static,
    {
        self.handlers.insert(key.into(), Box::new(handler));
        self
    }

    /// The keyword directive lines start with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Select the directive lines out of an entity's comment text.
    pub fn filter_lines<'c>(&self, comments: &'c str) -> Vec<&'c str> {
        filter_directive_lines(comments, &self.prefix)
    }

    /// Parse one directive line into its pairs, in source order.
    pub fn parse_line(&self, line: &str) -> Result<Vec<Directive>, DirectiveError> {
        let mut lx = Lexer::new(line);

        let word = lx.take_word(&[]);
        if word != self.prefix {
            return Err(DirectiveError::MalformedDirective {
                expected: self.prefix.clone(),
                found: word.to_string(),
                start: lx.start(),
                end: lx.pos(),
                line: line.to_string(),
            });
        }
        lx.commit();
        lx.skip_while(&[]);

        let mut directives = Vec::new();
        while !lx.at_end() {
            let key = lx.take_word(&['=']);
            lx.skip_while(&['=']);
            let handler =
                self.handlers
                    .get(key)
                    .ok_or_else(|| DirectiveError::UnknownDirectiveKey {
                        key: key.to_string(),
                        line: line.to_string(),
                    })?;
            directives.push(handler(&mut lx)?);
        }

        Ok(directives)
    }

    /// Parse every directive line in `comments`.
    ///
    /// Stops at the first malformed line.
    pub fn parse_comments(&self, comments: &str) -> Result<Vec<Directive>, DirectiveError> {
        let mut directives = Vec::new();
        for line in self.filter_lines(comments) {
            directives.extend(self.parse_line(line)?);
        }
        Ok(directives)
    }
}

/// Lines of `comments` that start with `prefix`, compared verbatim.
pub fn filter_directive_lines<'c>(comments: &'c str, prefix: &str) -> Vec<&'c str> {
    comments
        .lines()
        .filter(|line| line.starts_with(prefix))
        .collect()
}
