//! The tunnel resolution pipeline.
//!
//! Four stages run strictly one after another, each feeding the next:
//! - [`fetch_tunnels`] - list active tunnels from the ngrok web interface
//! - [`split_urls`] - split each public URL into hostname and port
//! - [`resolve_all`] - resolve each hostname to its first IP address
//! - [`format_report`] - render one line per tunnel
//!
//! [`convert`] chains them. The first error ends the run with no partial
//! output.

mod api;
mod endpoint;
mod report;
mod resolver;
#[cfg(test)]
pub(crate) mod testing;

pub use resolver::{Resolve, SystemResolver};

use api::fetch_tunnels;
use endpoint::split_urls;
use report::format_report;
use resolver::resolve_all;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Run the whole pipeline and return the report text
pub async fn convert<R: Resolve>(config: &Config, resolver: &R) -> Result<String> {
    let tunnels = fetch_tunnels(config).await?;
    info!("Tunnel manager reports {} tunnel(s)", tunnels.len());

    let public_urls: Vec<&str> = tunnels.iter().map(|t| t.public_url.as_str()).collect();
    let local_addrs: Vec<&str> = tunnels.iter().map(|t| t.local_addr.as_str()).collect();

    let endpoints = split_urls(&public_urls)?;
    let resolved = resolve_all(resolver, &endpoints).await?;

    Ok(format_report(&local_addrs, &resolved))
}
