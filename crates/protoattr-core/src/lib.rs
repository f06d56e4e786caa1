//! protoattr-core - Directive compiler and message registry for Go code generation
//!
//! This crate compiles `go:attr` directives found in protobuf message comments
//! into Go methods, and collects numeric message identifiers into a
//! `NewMessageByID` dispatch table:
//! - [`Lexer`] scans a single directive line
//! - [`DirectiveParser`] dispatches top-level `key=value` pairs to handlers
//! - [`MethodGrammar`] parses `method="name:...,in:[...],out:[...]"` values
//! - [`render_method`] turns a [`MethodDescriptor`] into Go source
//! - [`Registry`] tracks identifiers and renders the registry file
//! - [`GenerationRun`] drives all of the above for one run
//!
//! ```
//! use protoattr_core::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut comments = HashMap::new();
//! comments.insert(
//!     "Foo".to_string(),
//!     r#"go:attr method="name:GetX,in:[],out:[int=42]""#.to_string(),
//! );
//!
//! let mut run = GenerationRun::new(GeneratorConfig::default())?;
//! let mut code = String::new();
//! run.process_message(&comments, &MessageEntity::new("Foo"), &mut code)?;
//!
//! assert_eq!(code, "func (m *Foo) GetX() int {\nreturn 42\n}\n\n");
//! assert!(run.finish("pb")?.is_none());
//! # Ok::<(), GenerateError>(())
//! ```

mod config;
mod directive;
mod emit;
mod error;
mod format;
mod host;
mod lexer;
mod method;
mod registry;
mod run;

pub use config::{FormatterKind, GeneratorConfig};
pub use directive::{
    DEFAULT_PREFIX, Directive, DirectiveHandler, DirectiveParser, filter_directive_lines,
};
pub use emit::{emit_method, render_method};
pub use error::{
    ConfigError, DirectiveError, FormatError, GenerateError, GenerateResult, RegistryError,
};
pub use format::{BuiltinFormatter, GofmtFormatter, SourceFormatter};
pub use host::{CodeSink, CommentSource, MessageEntity, SourceArtifact};
pub use lexer::Lexer;
pub use method::{FieldHandler, MethodDescriptor, MethodGrammar, Parameter, parse_param_list};
pub use registry::{Registration, Registry};
pub use run::GenerationRun;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodeSink, CommentSource, Directive, DirectiveParser, GenerateError, GenerateResult,
        GenerationRun, GeneratorConfig, MessageEntity, MethodDescriptor, Parameter, Registry,
        SourceArtifact,
    };
}
