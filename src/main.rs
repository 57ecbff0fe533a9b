//! `figment-mcp`: brand context MCP server and maintenance commands.
//!
//! # Environment Variables
//!
//! - `FIGMENT_CONTEXT_PATH`: persisted context (default `.figment/brand-context.json`)
//! - `FIGMENT_MAX_MESSAGE_BYTES`: JSON-RPC frame limit (default 1 MiB)
//! - `RUST_LOG`: log verbosity (default `figment_mcp=info`)
//!
//! Logs go to stderr; stdout carries protocol frames when serving.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use figment_mcp::config::ServerConfig;
use figment_mcp::import::import_markdown_file;
use figment_mcp::server::{McpServer, SETUP_HINT};
use figment_mcp::store::ContextStore;
use figment_mcp::style::render_css_variables;

const DEFAULT_CSS_OUTPUT: &str = "figment-variables.css";

/// Brand context server for AI coding tools
#[derive(Parser)]
#[command(name = "figment-mcp")]
#[command(about = "Brand context MCP server")]
#[command(version)]
struct Args {
    /// Path of the persisted brand context (overrides FIGMENT_CONTEXT_PATH)
    #[arg(long, global = true)]
    context: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve resources and tools over stdio (default)
    Serve,
    /// Write CSS custom properties for the stored brand context
    Css {
        #[arg(short, long, default_value = DEFAULT_CSS_OUTPUT)]
        output: PathBuf,
    },
    /// Show the configured brand context
    Status,
    /// Import a markdown brand guide and save it as the brand context
    Import {
        file: PathBuf,
        /// Brand name to use instead of the one found in the file
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("figment-mcp: cannot initialize logging: {e}");
        std::process::exit(1);
    }

    let args = Args::parse();

    let mut config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(path) = args.context {
        config = config.with_context_path(path);
    }

    let result = match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Css { output } => write_css(&config, &output),
        Command::Status => {
            status(&config);
            Ok(())
        }
        Command::Import { file, name } => import(&config, &file, name),
    };

    if let Err(e) = result {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("figment_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(context = %config.context_path.display(), "Starting figment MCP server");
    let mut server = McpServer::new(config);
    server.run().await
}

fn write_css(config: &ServerConfig, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ContextStore::new(config.context_path.clone());
    let Some(context) = store.load() else {
        return Err(format!("no brand context configured. {SETUP_HINT}").into());
    };

    std::fs::write(output, render_css_variables(&context))?;
    tracing::info!(output = %output.display(), "Wrote CSS variables");
    Ok(())
}

fn status(config: &ServerConfig) {
    let mut store = ContextStore::new(config.context_path.clone());
    let Some(context) = store.load() else {
        println!("No brand context configured.");
        println!("{SETUP_HINT}");
        return;
    };

    println!("Brand context configured");
    println!("  Name:      {}", context.name);
    println!("  Version:   {}", context.version);
    println!("  Primary:   {}", context.colors.primary);
    println!("  Secondary: {}", context.colors.secondary);
    println!("  Heading:   {}", context.typography.font_family.heading);
    println!("  Body:      {}", context.typography.font_family.body);
}

fn import(
    config: &ServerConfig,
    file: &Path,
    name: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut partial = import_markdown_file(file)?;
    if name.is_some() {
        partial.name = name;
    }

    let mut store = ContextStore::new(config.context_path.clone());
    let brand = store.save(partial.complete_with_defaults())?.name.clone();
    println!("Imported \"{brand}\" into {}", store.path().display());
    Ok(())
}
