//! Converter Hub MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr.
//!
//! Tools:
//! - convert: Convert one value between two units of a category
//! - quick_convert: Convert a free-text query such as "5 km to mi"
//! - batch_list: Convert a list of values, with summary and CSV
//! - batch_range: Convert start..=end by step, with summary and CSV
//! - list_categories: Browse categories and their units
//! - history: Recent conversions from this session
//!
//! Environment:
//! - HUB_PRECISION: decimal places in formatted output (default 6)
//! - HUB_MAX_BATCH: largest batch accepted (default 10000)
//! - HUB_HISTORY: conversions kept for `history` (default 50)
//! - RUST_LOG: log filter (default info)

mod config;
mod protocol;
mod tools;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::protocol::{Server, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    // Respect RUST_LOG, default to "info"
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the protocol
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let mut server = Server::new(config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Converter Hub MCP Server started");
    info!(
        precision = config.precision,
        max_batch = config.max_batch,
        history = config.history_capacity,
        "configuration"
    );
    debug!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "stdio"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let Some(reply) = server.handle_line(line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", reply) {
                    error!(error = %e, "error writing response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!(error = %e, "error flushing stdout");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("Server shutting down");
}
