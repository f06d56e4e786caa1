//! Error types for directive compilation and registry rendering

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// A directive line that cannot be compiled.
///
/// Every variant is fatal for the generation run and carries the full
/// offending line for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// The line does not open with the directive keyword
    #[error("malformed directive: expected `{expected}` at [{start},{end}], found `{found}` in `{line}`")]
    MalformedDirective {
        expected: String,
        found: String,
        start: usize,
        end: usize,
        line: String,
    },

    /// A top-level key with no registered handler
    #[error("unknown directive key `{key}` in `{line}`")]
    UnknownDirectiveKey { key: String, line: String },

    /// A `method` value that does not open with a double quote
    #[error("method value is not a quoted string, found `{found}` in `{line}`")]
    UnquotedMethodValue { found: String, line: String },

    /// A method field key other than the registered ones
    #[error("unknown method field `{field}` in `{line}`")]
    MethodFieldError { field: String, line: String },

    /// A parameter list without its opening `[` or closing `]`
    #[error("malformed parameter list: {reason} in `{line}`")]
    MalformedParamList { reason: String, line: String },
}

/// Errors raised while rendering the registry artifact
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A registered identifier is not an unsigned 16-bit number
    #[error("message id `{id}` of `{name}` is not a valid uint16")]
    InvalidMessageId { id: String, name: String },

    /// The rendered source failed the formatting pass
    #[error("format {artifact} error: {source}")]
    Format {
        artifact: String,
        #[source]
        source: FormatError,
    },
}

/// Failure of the formatting pass over generated source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A closing delimiter with no matching opener
    #[error("unexpected `{found}` at line {line}")]
    UnexpectedClose { found: char, line: usize },

    /// A closing delimiter that does not match the innermost opener
    #[error("mismatched `{found}` at line {line}, expected `{expected}`")]
    Mismatched {
        found: char,
        expected: char,
        line: usize,
    },

    /// Openers left on the stack at end of input
    #[error("unclosed `{open}` opened at line {line}")]
    Unclosed { open: char, line: usize },

    /// A string, rune or comment that runs off the end of its line or input
    #[error("unterminated {what} starting at line {line}")]
    Unterminated { what: &'static str, line: usize },

    /// The external formatter could not be run or rejected the source
    #[error("external formatter failed: {0}")]
    External(String),
}

/// Configuration loading or validation failure
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`crate::GeneratorConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds an unusable value
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Umbrella error for a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A directive on `entity` failed to compile
    #[error("directive error on {entity}: {source}")]
    Directive {
        entity: String,
        #[source]
        source: DirectiveError,
    },

    /// Registry rendering failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenerateError {
    /// Wrap a directive error with the entity it was found on
    pub fn directive(entity: impl Into<String>, source: DirectiveError) -> Self {
        GenerateError::Directive {
            entity: entity.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
