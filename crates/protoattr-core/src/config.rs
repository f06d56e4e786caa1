//! Generator configuration

use crate::directive::DEFAULT_PREFIX;
use crate::error::ConfigError;
use crate::format::{BuiltinFormatter, GofmtFormatter, SourceFormatter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which formatting pass generated files go through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Built-in brace-depth formatter
    #[default]
    Builtin,

    /// External `gofmt` from `PATH`
    Gofmt,
}

impl FormatterKind {
    /// Instantiate the formatter
    pub fn build(self) -> Box<dyn SourceFormatter> {
        match self {
            FormatterKind::Builtin => Box::new(BuiltinFormatter),
            FormatterKind::Gofmt => Box::new(GofmtFormatter::default()),
        }
    }
}

/// Configuration for a generation run, usually read from `protoattr.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Keyword that opens a directive line in a doc comment
    #[serde(default = "default_directive_prefix")]
    pub directive_prefix: String,

    /// File name of the generated registry
    #[serde(default = "default_registry_file_name")]
    pub registry_file_name: String,

    /// Import path of the package providing the message interface
    #[serde(default = "default_message_import")]
    pub message_import: String,

    /// Interface type returned by registry constructors
    #[serde(default = "default_message_interface")]
    pub message_interface: String,

    /// Formatting pass for generated files
    #[serde(default)]
    pub formatter: FormatterKind,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_directive_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_registry_file_name() -> String {
    "register.msg.go".to_string()
}

fn default_message_import() -> String {
    "github.com/gogo/protobuf/proto".to_string()
}

fn default_message_interface() -> String {
    "proto.Message".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            directive_prefix: default_directive_prefix(),
            registry_file_name: default_registry_file_name(),
            message_import: default_message_import(),
            message_interface: default_message_interface(),
            formatter: FormatterKind::default(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directive_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "directive_prefix cannot be empty".to_string(),
            ));
        }

        if self.directive_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "directive_prefix cannot contain whitespace: {:?}",
                self.directive_prefix
            )));
        }

        if !self.registry_file_name.ends_with(".go") || self.registry_file_name.len() <= 3 {
            return Err(ConfigError::Invalid(format!(
                "registry_file_name must be a .go file: {:?}",
                self.registry_file_name
            )));
        }

        if self.message_import.is_empty() {
            return Err(ConfigError::Invalid(
                "message_import cannot be empty".to_string(),
            ));
        }

        if self.message_interface.is_empty() {
            return Err(ConfigError::Invalid(
                "message_interface cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
