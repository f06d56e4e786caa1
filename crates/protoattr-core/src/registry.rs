//! Message identifier registry
//!
//! A [`Registry`] collects `id -> type name` bindings for one generation run
//! and renders them into a Go dispatch table:
//!
//! ```go
//! var register = map[uint16]func() proto.Message{
//!     uint16(1001): func() proto.Message { return &LoginReq{} },
//! }
//!
//! func NewMessageByID(msgID uint16) (proto.Message, error)
//! ```
//!
//! The first binding for an identifier wins. Later attempts to bind the same
//! identifier to another type are logged and ignored.

use crate::config::GeneratorConfig;
use crate::error::RegistryError;
use crate::format::SourceFormatter;
use crate::host::SourceArtifact;
use std::collections::HashMap;

/// Outcome of a [`Registry::register`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The identifier was free and is now bound.
    Bound,

    /// The identifier was already bound to the same type.
    Unchanged,

    /// The identifier belongs to another type; the existing binding stays.
    Conflict { existing: String },
}

/// Run-scoped table of message identifiers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    name_by_id: HashMap<String, String>,
    id_by_name: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id` to `name` unless the identifier is already taken.
    ///
    /// Identifiers that parse as `u16` are stored in canonical decimal form,
    /// so `"01"` and `"1"` are the same identifier.
    pub fn register(&mut self, id: &str, name: &str) -> Registration {
        let id = canonical_id(id);

        if let Some(existing) = self.name_by_id.get(&id) {
            if existing == name {
                return Registration::Unchanged;
            }
            tracing::warn!(
                id = %id,
                existing = %existing,
                attempted = %name,
                "message id {id} requested by {name} is already used by {existing}"
            );
            return Registration::Conflict {
                existing: existing.clone(),
            };
        }

        tracing::debug!(id = %id, name = %name, "registered message id");
        self.name_by_id.insert(id.clone(), name.to_string());
        self.id_by_name.insert(name.to_string(), id);
        Registration::Bound
    }

    /// Type name bound to `id`.
    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.name_by_id.get(&canonical_id(id)).map(String::as_str)
    }

    /// Identifier bound to `name`.
    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.id_by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.name_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_by_id.is_empty()
    }

    /// Bindings sorted by numeric identifier.
    ///
    /// Fails on the first identifier that is not a valid `u16`.
    pub fn entries(&self) -> Result<Vec<(u16, &str)>, RegistryError> {
        let mut entries = self
            .name_by_id
            .iter()
            .map(|(id, name)| {
                id.parse::<u16>()
                    .map(|n| (n, name.as_str()))
                    .map_err(|_| RegistryError::InvalidMessageId {
                        id: id.clone(),
                        name: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_unstable_by_key(|(id, _)| *id);
        Ok(entries)
    }

    /// Render the dispatch-table source file for `package`.
    ///
    /// Returns `Ok(None)` when nothing was registered.
    pub fn render(
        &self,
        package: &str,
        config: &GeneratorConfig,
        formatter: &dyn SourceFormatter,
    ) -> Result<Option<SourceArtifact>, RegistryError> {
        if self.is_empty() {
            return Ok(None);
        }

        let source = self.render_source(package, config)?;
        let content = formatter
            .format(&source)
            .map_err(|source| RegistryError::Format {
                artifact: config.registry_file_name.clone(),
                source,
            })?;

        tracing::info!(
            file = %config.registry_file_name,
            messages = self.len(),
            "rendered message registry"
        );

        Ok(Some(SourceArtifact {
            name: config.registry_file_name.clone(),
            content,
        }))
    }

    /// Unformatted registry source.
    fn render_source(
        &self,
        package: &str,
        config: &GeneratorConfig,
    ) -> Result<String, RegistryError> {
        let message = &config.message_interface;
        let mut code = String::with_capacity(1024);

        code.push_str("// Code generated by protoattr. DO NOT EDIT.\n");
        code.push_str(&format!("package {package}\n\n"));

        code.push_str("import (\n");
        code.push_str("\"fmt\"\n\n");
        code.push_str(&format!("\"{}\"\n", config.message_import));
        code.push_str(")\n\n");

        // Dispatch table
        code.push_str(&format!("var register = map[uint16]func() {message}{{\n"));
        for (id, name) in self.entries()? {
            code.push_str(&format!(
                "uint16({id}): func() {message} {{ return &{name}{{}} }},\n"
            ));
        }
        code.push_str("}\n\n");

        // Lookup
        code.push_str("// NewMessageByID returns a new message for a registered message id.\n");
        code.push_str(&format!(
            "func NewMessageByID(msgID uint16) ({message}, error) {{\n"
        ));
        code.push_str("if fn, ok := register[msgID]; ok {\n");
        code.push_str("return fn(), nil\n");
        code.push_str("}\n");
        code.push_str("return nil, fmt.Errorf(\"unknown message id %d\", msgID)\n");
        code.push_str("}\n");

        Ok(code)
    }
}

fn canonical_id(id: &str) -> String {
    let id = id.trim();
    match id.parse::<u16>() {
        Ok(n) => n.to_string(),
        Err(_) => id.to_string(),
    }
}
