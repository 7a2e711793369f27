use std::io;
use std::net::IpAddr;
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::protocol::{HostPort, ResolvedAddress};

/// Forward DNS lookup
pub trait Resolve {
    /// Every address the hostname resolves to, in resolver order
    async fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the operating system's name service
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl Resolve for SystemResolver {
    async fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((hostname, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

/// Resolve each endpoint's hostname to its first address.
///
/// Lookups run one after another. The first failure, or a hostname with no
/// addresses, aborts the whole batch.
pub async fn resolve_all<R: Resolve>(
    resolver: &R,
    endpoints: &[HostPort],
) -> Result<Vec<ResolvedAddress>> {
    let mut resolved = Vec::with_capacity(endpoints.len());

    for endpoint in endpoints {
        let ips = resolver
            .lookup(&endpoint.hostname)
            .await
            .map_err(|source| ResolveError::Resolution {
                hostname: endpoint.hostname.clone(),
                source,
            })?;

        let ip = ips
            .first()
            .copied()
            .ok_or_else(|| ResolveError::NoAddress(endpoint.hostname.clone()))?;

        debug!("{} -> {}", endpoint.hostname, ip);
        resolved.push(ResolvedAddress {
            ip,
            port: endpoint.port.clone(),
        });
    }

    Ok(resolved)
}
