use serde::Deserialize;

use super::TunnelRecord;

/// Response body of the tunnel manager's `/api/tunnels` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TunnelsResponse {
    /// Absent or `null` when no tunnel is open
    #[serde(default)]
    pub tunnels: Option<Vec<ApiTunnel>>,
}

/// A single tunnel as reported by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTunnel {
    pub public_url: String,
    pub config: TunnelConfig,
}

/// Configuration block nested in each tunnel
#[derive(Debug, Clone, Deserialize)]
pub struct TunnelConfig {
    pub addr: String,
}

impl TunnelsResponse {
    /// Flatten the response into records, preserving API order
    pub fn into_records(self) -> Vec<TunnelRecord> {
        self.tunnels
            .unwrap_or_default()
            .into_iter()
            .map(|tunnel| TunnelRecord {
                public_url: tunnel.public_url,
                local_addr: tunnel.config.addr,
            })
            .collect()
    }
}
