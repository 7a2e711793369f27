use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ResolveError, Result};
use crate::protocol::{TunnelRecord, TunnelsResponse};

/// Fetch the active tunnels from the tunnel manager's local API.
///
/// Records come back in the order the API lists them.
pub async fn fetch_tunnels(config: &Config) -> Result<Vec<TunnelRecord>> {
    let url = config.api_url();
    let connection_error = |source| ResolveError::Connection {
        url: url.clone(),
        source,
    };

    // The web interface is always local, never go through a proxy
    let client = Client::builder()
        .no_proxy()
        .build()
        .map_err(connection_error)?;

    debug!("Requesting {}", url);
    let response = client.get(&url).send().await.map_err(connection_error)?;

    let status = response.status();
    if !status.is_success() {
        warn!("Tunnel manager answered {} for {}", status, url);
    }

    let body = response.bytes().await.map_err(ResolveError::Read)?;
    let decoded: TunnelsResponse = serde_json::from_slice(&body)?;
    let records = decoded.into_records();

    debug!("Found {} tunnel(s)", records.len());
    Ok(records)
}
