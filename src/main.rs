//! tunnel-resolve
//!
//! Asks a locally running ngrok agent which tunnels it has open, resolves
//! each tunnel's public hostname, and prints where every local address is
//! reachable as a plain `ip:port` pair.

#![deny(clippy::correctness)]
#![warn(clippy::suspicious)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod pipeline;
mod protocol;

use config::{Config, DEFAULT_HOST, DEFAULT_PORT};
use pipeline::{Resolve, SystemResolver};

#[derive(Parser, Debug)]
#[command(name = "tunnel-resolve")]
#[command(author, version, about = "Show the public ip:port of every ngrok tunnel")]
struct Cli {
    /// The host of the ngrok web interface
    #[arg(short = 'H', long, default_value = DEFAULT_HOST, env = "NGROK_WEB_HOST")]
    host: String,

    /// The port of the ngrok web interface
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "NGROK_WEB_PORT")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.host, cli.port);

    let stdin = io::stdin();
    let result = run(
        &config,
        &SystemResolver,
        &mut io::stdout().lock(),
        &mut stdin.lock(),
    )
    .await;

    if let Err(e) = result {
        std::process::exit(report_failure(&e, &mut io::stderr()));
    }
}

/// Print the report to `out`, then wait for one line on `input`.
///
/// Nothing is written when the pipeline fails.
async fn run<R: Resolve>(
    config: &Config,
    resolver: &R,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<()> {
    let output = pipeline::convert(config, resolver).await?;
    writeln!(out, "{}", output).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    // Keep the window open when launched outside a terminal
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok(())
}

/// Write the whole error chain on one line and return the exit code
fn report_failure(err: &anyhow::Error, stderr: &mut impl Write) -> i32 {
    let _ = writeln!(stderr, "{:#}", err);
    1
}

fn init_logging(verbose: bool) {
    // Logs go to stderr so stdout only carries the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
