//! Schema description parsing and validation
//!
//! The CLI does not read `.proto` files itself. It consumes a description of
//! the already-parsed schema: the Go package, and for every source file the
//! messages it declares with their doc comments and optional message ids.
//!
//! ```toml
//! package = "pb"
//!
//! [[files]]
//! name = "login.proto"
//!
//! [[files.messages]]
//! name = "LoginReq"
//! id = 1001
//! comments = """
//! LoginReq is sent on connect.
//! go:attr method="name:MsgID,in:[],out:[uint16=1001]"
//! """
//! ```

use anyhow::{Context, Result};
use protoattr_core::{CommentSource, MessageEntity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Top-level schema description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Go package of the generated files
    pub package: String,

    #[serde(default)]
    pub files: Vec<SchemaFile>,
}

/// One source file of the schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Source file name, e.g. `login.proto`
    pub name: String,

    #[serde(default)]
    pub messages: Vec<SchemaMessage>,
}

/// One message type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaMessage {
    /// Go type name
    pub name: String,

    /// Comment lookup path (default: `<file>/<name>`)
    #[serde(default)]
    pub path: Option<String>,

    /// Numeric message id
    #[serde(default)]
    pub id: Option<MessageId>,

    /// Raw doc comment
    #[serde(default)]
    pub comments: String,
}

/// Message id written either as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(u64),
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Number(n) => write!(f, "{n}"),
            MessageId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl SchemaMessage {
    /// Comment lookup path within `file`
    pub fn comment_path(&self, file: &SchemaFile) -> String {
        self.path
            .clone()
            .unwrap_or_else(|| format!("{}/{}", file.name, self.name))
    }

    /// Entity handed to the generation run
    pub fn entity(&self, file: &SchemaFile) -> MessageEntity {
        let entity = MessageEntity::new(&self.name).with_path(self.comment_path(file));
        match &self.id {
            Some(id) => entity.with_message_id(id.to_string()),
            None => entity,
        }
    }
}

impl Schema {
    /// Load a schema description; `.json` files are read as JSON, anything
    /// else as TOML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema: {path:?}"))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse a TOML schema description
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse schema")
    }

    /// Parse a JSON schema description
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse schema")
    }

    /// Validate the schema description
    pub fn validate(&self) -> Result<()> {
        if !is_go_identifier(&self.package) {
            anyhow::bail!("Package name is not a valid Go identifier: {:?}", self.package);
        }

        for file in &self.files {
            if file.name.is_empty() {
                anyhow::bail!("File name cannot be empty");
            }

            for message in &file.messages {
                if !is_go_identifier(&message.name) {
                    anyhow::bail!(
                        "Message name in {} is not a valid Go identifier: {:?}",
                        file.name,
                        message.name
                    );
                }
            }
        }

        Ok(())
    }

    /// Comment text keyed by lookup path
    pub fn comment_index(&self) -> SchemaComments {
        let mut by_path = HashMap::new();
        for file in &self.files {
            for message in &file.messages {
                by_path.insert(message.comment_path(file), message.comments.clone());
            }
        }
        SchemaComments { by_path }
    }
}

/// [`CommentSource`] over a loaded schema
#[derive(Debug, Clone, Default)]
pub struct SchemaComments {
    by_path: HashMap<String, String>,
}

impl CommentSource for SchemaComments {
    fn comments_for(&self, path: &str) -> String {
        self.by_path.comments_for(path)
    }
}

fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
