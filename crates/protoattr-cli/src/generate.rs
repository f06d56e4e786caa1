//! Generate, check and init-config command implementations

use crate::logging::init_logging;
use crate::schema::{Schema, SchemaFile};
use anyhow::{Context, Result};
use protoattr_core::{GenerationRun, GeneratorConfig, SourceArtifact};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Output of a completed generation run
#[derive(Debug, Default)]
pub struct Generated {
    /// Files to write, in schema order with the registry last
    pub artifacts: Vec<SourceArtifact>,

    /// Messages that carried at least one directive line
    pub annotated: usize,

    /// Message ids bound in the registry; conflicting ids are not counted
    pub registered: usize,
}

/// Run the generate command
pub fn run(
    schema_path: &str,
    output: &str,
    config_path: Option<String>,
    log_level: Option<String>,
) -> Result<()> {
    let (schema, config) = load(schema_path, config_path, log_level)?;

    let generated = generate(&schema, config)?;
    write_artifacts(Path::new(output), &generated.artifacts)?;

    println!("✓ Annotated messages: {}", generated.annotated);
    println!("✓ Registered ids: {}", generated.registered);
    for artifact in &generated.artifacts {
        println!("  wrote {}/{}", output, artifact.name);
    }

    Ok(())
}

/// Run the check command
pub fn check(
    schema_path: &str,
    config_path: Option<String>,
    log_level: Option<String>,
) -> Result<()> {
    let (schema, config) = load(schema_path, config_path, log_level)?;

    println!("Checking schema: {}", schema_path);

    let generated = generate(&schema, config)?;

    println!("✓ Package: {}", schema.package);
    println!("✓ Files: {}", schema.files.len());
    println!("✓ Annotated messages: {}", generated.annotated);
    println!("✓ Registered ids: {}", generated.registered);
    println!("\nDirectives are valid!");

    Ok(())
}

/// Run the init-config command
pub fn init_config(path: &str) -> Result<()> {
    let path = Path::new(path);
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", path.display());
    }

    let content = GeneratorConfig::default().to_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write {path:?}"))?;

    println!("✓ Wrote {}", path.display());

    Ok(())
}

/// Load the configuration and schema, and install logging
fn load(
    schema_path: &str,
    config_path: Option<String>,
    log_level: Option<String>,
) -> Result<(Schema, GeneratorConfig)> {
    let config = match config_path {
        Some(path) => GeneratorConfig::from_file(&path)
            .with_context(|| format!("Failed to load config: {path}"))?,
        None => GeneratorConfig::default(),
    };
    init_logging(log_level.as_deref(), &config.log_level);

    let schema = Schema::from_file(schema_path)?;
    schema.validate()?;

    Ok((schema, config))
}

/// Compile every message of `schema` in one run.
///
/// Nothing is returned unless the whole run succeeds. Two schema files whose
/// outputs would share a file name fail the run.
pub fn generate(schema: &Schema, config: GeneratorConfig) -> Result<Generated> {
    let mut run = GenerationRun::new(config)?;
    let comments = schema.comment_index();
    let mut generated = Generated::default();

    let mut owners: HashMap<String, &str> = HashMap::new();

    for file in &schema.files {
        let mut code = String::new();

        for message in &file.messages {
            let entity = message.entity(file);
            if run.process_message(&comments, &entity, &mut code)? {
                generated.annotated += 1;
            }
        }

        if code.is_empty() {
            continue;
        }

        let name = output_file_name(&file.name);
        if let Some(owner) = owners.insert(name.clone(), &file.name) {
            anyhow::bail!(
                "Output file {} of {} collides with the one generated for {}",
                name,
                file.name,
                owner
            );
        }

        let source = file_header(file, &schema.package) + &code;
        let content = run
            .formatter()
            .format(&source)
            .with_context(|| format!("Failed to format methods generated for {}", file.name))?;

        tracing::debug!(file = %file.name, bytes = content.len(), "generated methods");
        generated.artifacts.push(SourceArtifact { name, content });
    }

    generated.registered = run.registry().len();
    if let Some(registry) = run.finish(&schema.package)? {
        if let Some(owner) = owners.get(&registry.name) {
            anyhow::bail!(
                "Registry file {} collides with the one generated for {}",
                registry.name,
                owner
            );
        }
        generated.artifacts.push(registry);
    }

    Ok(generated)
}

fn file_header(file: &SchemaFile, package: &str) -> String {
    format!(
        "// Code generated by protoattr. DO NOT EDIT.\n// source: {}\n\npackage {}\n\n",
        file.name, package
    )
}

/// `dir/login.proto` -> `login.attr.go`
fn output_file_name(source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source);
    format!("{stem}.attr.go")
}

/// Write artifacts into `output_dir`, creating it if needed
pub fn write_artifacts(output_dir: &Path, artifacts: &[SourceArtifact]) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {output_dir:?}"))?;

    for artifact in artifacts {
        let output_file = output_dir.join(&artifact.name);
        fs::write(&output_file, &artifact.content)
            .with_context(|| format!("Failed to write {output_file:?}"))?;
    }

    Ok(())
}
