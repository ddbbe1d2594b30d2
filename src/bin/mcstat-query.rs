//! mcstat one-shot query
//!
//! Queries a Minecraft server once and prints the status as JSON.

use clap::Parser;
use mcstat::{logging, Config, LogLevel, StatusClient};

/// Query a Minecraft server once
#[derive(Parser, Debug)]
#[command(name = "mcstat-query")]
#[command(about = "Print the status of a Minecraft server as JSON")]
#[command(version)]
struct Args {
    /// The address of the Minecraft server
    #[arg(short = 'a', long, default_value = "127.0.0.1")]
    address: String,

    /// The port the Minecraft server is running on
    #[arg(short = 'p', long, default_value = "25565")]
    port: u16,

    /// Connect and read timeout in milliseconds
    #[arg(short = 't', long, default_value = "5000")]
    timeout_ms: u64,

    /// Log level (DEBUG, INFO or ERROR)
    #[arg(short = 'l', long, default_value = "ERROR")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let (log_level, _) = LogLevel::resolve(&args.log_level);
    logging::init(log_level);

    let config = Config::builder()
        .server_host(&args.address)
        .server_port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let result = StatusClient::new(config)
        .and_then(|client| client.status())
        .and_then(|status| status.to_json());

    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
