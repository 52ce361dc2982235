//! unity-bridge-mcp: MCP server bridging AI agents to a running Unity Editor.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use unity_bridge_mcp::bridge::Bridge;
use unity_bridge_mcp::config;
use unity_bridge_mcp::config::TransportKind;
use unity_bridge_mcp::mcp::server::McpServer;

/// MCP server bridging AI agents to a running Unity Editor.
///
/// Exposes editor operations (create objects, set transforms, read the
/// hierarchy, ...) as MCP tools and relays them over WebSocket or HTTP.
#[derive(Parser, Debug)]
#[command(name = "unity-bridge-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Editor host, overriding the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Editor port, overriding the configuration file
    #[arg(long)]
    port: Option<u16>,

    /// Use the HTTP transport instead of the configured one
    #[arg(long)]
    http: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            // Default to warn for "warn" and unknown levels alike
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
///
/// Logs go to stderr; stdout belongs to the MCP protocol.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the unity-bridge-mcp server.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.as_deref();
    let mut cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // CLI overrides
    if let Some(host) = args.host {
        cfg.host.address = host;
    }
    if let Some(port) = args.port {
        cfg.host.port = port;
    }
    if args.http {
        cfg.bridge.transport = TransportKind::Http;
    }

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        editor = %format!("{}:{}", cfg.host.address, cfg.host.port),
        transport = ?cfg.bridge.transport,
        "Starting unity-bridge-mcp server"
    );

    let bridge = Bridge::from_config(&cfg);
    let mut server = McpServer::new(bridge);

    info!("MCP server ready, waiting for client connection...");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server.run()) {
        Ok(()) => {
            info!("Server shut down gracefully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}
