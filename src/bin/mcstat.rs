//! mcstat Server Binary
//!
//! Serves the status of a Minecraft server over HTTP.

use clap::Parser;
use mcstat::http::Server;
use mcstat::{logging, Config, LogLevel};

/// mcstat HTTP status server
#[derive(Parser, Debug)]
#[command(name = "mcstat")]
#[command(about = "A simple HTTP Minecraft status server")]
#[command(version)]
struct Args {
    /// The address of the Minecraft server
    #[arg(short = 'a', long, default_value = "127.0.0.1")]
    address: String,

    /// The port the Minecraft server is running on
    #[arg(short = 'p', long, default_value = "25565")]
    port: u16,

    /// The port the mcstat server will run at
    #[arg(short = 's', long, default_value = "8080")]
    server_port: u16,

    /// Log level (DEBUG, INFO or ERROR)
    #[arg(short = 'l', long, default_value = "INFO")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let (log_level, recognized) = LogLevel::resolve(&args.log_level);
    logging::init(log_level);

    if !recognized {
        tracing::info!(
            "Given log level {} was not recognized as one of (INFO, ERROR or DEBUG) so using INFO as default",
            args.log_level
        );
    }

    tracing::info!("mcstat v{}", mcstat::VERSION);
    tracing::info!("Minecraft server: {}:{}", args.address, args.port);

    let config = Config::builder()
        .server_host(&args.address)
        .server_port(args.port)
        .listen_port(args.server_port)
        .log_level(log_level)
        .build();

    let server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match server.runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(server.run()) {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
