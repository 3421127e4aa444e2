//! mediafed operator tool
//!
//! Validates proxy configuration and replays captured JSON bodies through the
//! identifier rewriters.
//!
//! Usage:
//!   mediafed --config mediafed.toml check-config
//!   mediafed --config mediafed.toml rewrite-response --prefix s1 < item.json
//!   mediafed --config mediafed.toml rewrite-request --input body.json
//!   mediafed decode s1_abc123

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mediafed_config::{FederationConfig, load_config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mediafed")]
#[command(about = "Inspect mediafed configuration and identifier rewriting")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "mediafed.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate the configuration, then print a summary
    CheckConfig,

    /// Rewrite a backend response into its client-facing form
    RewriteResponse {
        /// Prefix of the backend that produced the response
        #[arg(short, long)]
        prefix: String,

        /// Read the body from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Tag items with BackendId, BackendName and BackendUrl
        #[arg(long)]
        provenance: bool,
    },

    /// Rewrite a client request into its backend-facing form
    RewriteRequest {
        /// Read the body from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Describe what a client-facing identifier refers to
    Decode {
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::CheckConfig => {
            let config = load(&args.config)?;
            info!("Configuration is valid");
            stdout.write_all(mediafed_cli::summarize(&config).as_bytes())?;
        }
        Command::RewriteResponse {
            prefix,
            input,
            provenance,
        } => {
            let config = load(&args.config)?;
            let body = mediafed_cli::read_input(input.as_deref())?;
            let out = mediafed_cli::rewrite_response(&config, &prefix, &body, provenance)?;
            stdout.write_all(&out)?;
        }
        Command::RewriteRequest { input } => {
            let config = load(&args.config)?;
            let body = mediafed_cli::read_input(input.as_deref())?;
            let out = mediafed_cli::rewrite_request(&config, &body)?;
            stdout.write_all(&out)?;
        }
        Command::Decode { id } => {
            // The config only adds backend names, so a missing file is fine here.
            let config = load(&args.config).ok();
            let description = mediafed_cli::describe_id(&id, config.as_ref());
            serde_json::to_writer_pretty(&mut stdout, &description)?;
        }
    }
    writeln!(stdout)?;
    Ok(())
}

fn load(path: &Path) -> Result<FederationConfig> {
    load_config(path).with_context(|| format!("Failed to load config from {}", path.display()))
}
