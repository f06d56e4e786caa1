//! A single generation run
//!
//! [`GenerationRun`] ties the pieces together. The host calls
//! [`GenerationRun::process_message`] once per message type, in schema
//! order, and [`GenerationRun::finish`] once at the end to obtain the
//! registry artifact. The registry lives inside the run, so two runs never
//! share identifiers.

use crate::config::GeneratorConfig;
use crate::directive::{Directive, DirectiveParser};
use crate::emit::emit_method;
use crate::error::{GenerateError, GenerateResult};
use crate::format::SourceFormatter;
use crate::host::{CodeSink, CommentSource, MessageEntity, SourceArtifact};
use crate::registry::Registry;

/// State of one generation run.
pub struct GenerationRun {
    config: GeneratorConfig,
    parser: DirectiveParser,
    registry: Registry,
    formatter: Box<dyn SourceFormatter>,
}

impl GenerationRun {
    /// Start a run with a validated configuration.
    pub fn new(config: GeneratorConfig) -> GenerateResult<Self> {
        config.validate()?;

        Ok(Self {
            parser: DirectiveParser::new(config.directive_prefix.clone()),
            formatter: config.formatter.build(),
            registry: Registry::new(),
            config,
        })
    }

    /// Replace the directive parser, e.g. to add handlers.
    pub fn with_parser(mut self, parser: DirectiveParser) -> Self {
        self.parser = parser;
        self
    }

    /// Replace the formatter chosen by the configuration.
    pub fn with_formatter(mut self, formatter: Box<dyn SourceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register a message identifier outside of [`GenerationRun::process_message`].
    pub fn register(&mut self, id: &str, name: &str) {
        self.registry.register(id, name);
    }

    /// The formatter generated files go through.
    pub fn formatter(&self) -> &dyn SourceFormatter {
        self.formatter.as_ref()
    }

    /// Compile the directives attached to `entity` into `sink`.
    ///
    /// Every directive line is parsed before anything is emitted, so a
    /// failing entity leaves the sink untouched. Returns whether the entity
    /// carried any directive line.
    pub fn process_message(
        &mut self,
        comments: &dyn CommentSource,
        entity: &MessageEntity,
        sink: &mut dyn CodeSink,
    ) -> GenerateResult<bool> {
        let text = comments.comments_for(&entity.path);
        let lines = self.parser.filter_lines(&text);

        let mut directives = Vec::new();
        for line in &lines {
            let parsed = self
                .parser
                .parse_line(line)
                .map_err(|e| GenerateError::directive(&entity.type_name, e))?;
            directives.extend(parsed);
        }

        for directive in &directives {
            match directive {
                Directive::Method(method) => {
                    tracing::debug!(
                        type_name = %entity.type_name,
                        method = %method.name,
                        inputs = method.ins.len(),
                        outputs = method.outs.len(),
                        "emitting method"
                    );
                    emit_method(sink, &entity.type_name, method);
                    sink.emit_line("");
                }
            }
        }

        if let Some(id) = &entity.message_id {
            self.registry.register(id, &entity.type_name);
        }

        Ok(!lines.is_empty())
    }

    /// End the run and render the registry artifact for `package`.
    ///
    /// Returns `Ok(None)` when no message registered an identifier.
    pub fn finish(self, package: &str) -> GenerateResult<Option<SourceArtifact>> {
        let artifact = self
            .registry
            .render(package, &self.config, self.formatter.as_ref())?;
        Ok(artifact)
    }
}
