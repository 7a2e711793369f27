use std::fmt;
use std::net::IpAddr;

/// An active tunnel: its public URL and the local address it forwards to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelRecord {
    pub public_url: String,
    pub local_addr: String,
}

/// Hostname and port split out of a public URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub hostname: String,
    /// Empty when the URL carries no explicit port
    pub port: String,
}

/// A public endpoint after DNS resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub ip: IpAddr,
    pub port: String,
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}
