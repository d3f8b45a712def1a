mod app;
mod config;
mod error;
mod logging;
mod network;
mod terminal;
mod vars;

use clap::Parser;
use std::path::PathBuf;

use crate::app::App;
use crate::config::Overrides;
use crate::error::Result;
use crate::network::TcpConnector;
use crate::vars::ProcessEnv;

#[derive(Parser)]
#[command(name = "motd")]
#[command(about = "Fetch the message of the day and print it for this terminal", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server hostname (overrides MOTD_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides MOTD_PORT)
    #[arg(long, allow_negative_numbers = true)]
    port: Option<i64>,

    /// Connect and read timeout in milliseconds (overrides MOTD_TIMEOUT_MS)
    #[arg(long, allow_negative_numbers = true)]
    timeout_ms: Option<i64>,

    /// Log level: debug, info, warn or error (overrides MOTD_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level,
    };

    let config = config::load(cli.config.as_deref(), &ProcessEnv, overrides)?;
    let params = config.connection_params()?;

    logging::init(&config.log_level);
    tracing::debug!(
        host = %params.host,
        port = params.port,
        timeout = ?params.timeout,
        log_level = %config.log_level,
        "MOTD client initialized"
    );

    let app = App::new(params, TcpConnector, ProcessEnv);
    app.run(&mut std::io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
