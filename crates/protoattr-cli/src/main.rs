//! protoattr CLI - Directive compiler driver
//!
//! Commands:
//! - `protoattr generate` - Compile directives and write Go sources
//! - `protoattr check` - Compile directives without writing anything
//! - `protoattr init-config` - Write a default protoattr.toml

use clap::{Parser, Subcommand};

mod generate;
mod logging;
mod schema;

#[derive(Parser)]
#[command(name = "protoattr")]
#[command(author, version, about = "Compile go:attr directives into Go methods", long_about = None)]
struct Cli {
    /// Log level (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go methods and the message registry
    Generate {
        /// Path to the schema description (.toml or .json)
        #[arg(short, long)]
        schema: String,

        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// Path to protoattr.toml (default: built-in defaults)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate directives in a schema description without writing files
    Check {
        /// Path to the schema description (.toml or .json)
        #[arg(short, long)]
        schema: String,

        /// Path to protoattr.toml (default: built-in defaults)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write the default configuration
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "protoattr.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            config,
        } => {
            generate::run(&schema, &output, config, cli.log_level)?;
        }
        Commands::Check { schema, config } => {
            generate::check(&schema, config, cli.log_level)?;
        }
        Commands::InitConfig { path } => {
            generate::init_config(&path)?;
        }
    }

    Ok(())
}
