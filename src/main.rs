//! Kapili MCP Server - Main entrypoint.
//!
//! This is the main entry point for the Kapili MCP Server application.
//! It loads configuration, initializes the logging system, and serves
//! requests on stdin/stdout until the input is closed.

use clap::{Parser, Subcommand};
use kapili_mcp_lib::config::{self, ConfigLoader, KapiliConfig};
use kapili_mcp_lib::error::{
    report_error, set_error_reporter, ErrorContext, KapiliError, KapiliResult,
    TracingErrorReporter,
};
use kapili_mcp_lib::logging::init_logging;
use kapili_mcp_lib::protocol::jsonrpc::create_dispatcher;
use kapili_mcp_lib::transport::{Server, StdioTransport};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for the Kapili MCP Server.
#[derive(Parser, Debug)]
#[clap(name = "Kapili MCP Server", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Serve requests on stdin/stdout (default)
    Serve,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Serves until stdin is closed.
fn serve(config: KapiliConfig) -> KapiliResult<()> {
    let dispatcher = create_dispatcher(&config)?;
    // Stdio runs on the blocking pool, so no IO driver is needed
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    info!(
        name = %config.server.name,
        version = %config.server.version,
        protocol_version = %config.server.protocol_version,
        "Starting Kapili MCP Server"
    );

    runtime.block_on(async {
        let transport =
            StdioTransport::stdio().with_max_line_bytes(config.limits.max_line_bytes);
        let mut server = Server::new(transport, dispatcher);
        server.run().await
    })?;
    Ok(())
}

fn run(args: Args) -> KapiliResult<()> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = loader.load()?;
            init_logging(&config.log)?;
            set_error_reporter(Arc::new(TracingErrorReporter));
            serve(config)
        }
        Command::Validate => {
            let config = loader.load()?;
            eprintln!(
                "Configuration is valid (handle format: {:?}, strict arguments: {})",
                config.server.handle_format, config.limits.strict_arguments
            );
            Ok(())
        }
        Command::GenConfig { output } => {
            let rendered = KapiliConfig::default().to_toml()?;
            std::fs::write(&output, rendered)?;
            eprintln!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        let context = match e {
            KapiliError::Transport(_) => ErrorContext::new(e, "transport"),
            KapiliError::Config(_) => {
                ErrorContext::new(e, "config").with_details("see `kapili_mcp validate`")
            }
            other => ErrorContext::new(other, "main"),
        };
        eprintln!("{context}");
        report_error(context);
        process::exit(1);
    }
}
