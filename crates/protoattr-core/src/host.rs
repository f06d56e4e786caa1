//! Capabilities supplied by the host code generator
//!
//! The core never walks a schema or writes files itself. The host hands it
//! comment text through [`CommentSource`] and receives generated code
//! through [`CodeSink`].

use std::collections::{BTreeMap, HashMap};

/// Looks up the raw doc comment attached to a schema node.
pub trait CommentSource {
    /// Comment text for the node at `path`; empty when there is none.
    fn comments_for(&self, path: &str) -> String;
}

impl CommentSource for HashMap<String, String> {
    fn comments_for(&self, path: &str) -> String {
        self.get(path).cloned().unwrap_or_default()
    }
}

impl CommentSource for BTreeMap<String, String> {
    fn comments_for(&self, path: &str) -> String {
        self.get(path).cloned().unwrap_or_default()
    }
}

/// Any `Fn(&str) -> String` looks comments up by path.
impl<F> CommentSource for F
where
    F: Fn(&str) -> String,
{
    fn comments_for(&self, path: &str) -> String {
        self(path)
    }
}

/// Append-only sink for generated source text.
pub trait CodeSink {
    /// Append `text` as is.
    fn emit(&mut self, text: &str);

    /// Append `text` followed by a newline.
    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }
}

impl CodeSink for String {
    fn emit(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// A message type the host is generating code for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntity {
    /// Schema path used to look up comments.
    pub path: String,

    /// Go type name of the generated struct.
    pub type_name: String,

    /// Numeric message identifier, if the message declares one.
    pub message_id: Option<String>,
}

impl MessageEntity {
    /// Entity whose comment path is its type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            path: type_name.clone(),
            type_name,
            message_id: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }
}

/// A complete generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArtifact {
    /// File name relative to the output directory.
    pub name: String,

    /// Formatted file content.
    pub content: String,
}
