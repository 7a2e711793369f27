use url::{Host, Url};

use crate::error::{ResolveError, Result};
use crate::protocol::HostPort;

/// Split every public URL into hostname and port.
///
/// Fails on the first URL that cannot be parsed; nothing is returned for
/// the URLs before it.
pub fn split_urls<S: AsRef<str>>(urls: &[S]) -> Result<Vec<HostPort>> {
    urls.iter().map(|url| split_url(url.as_ref())).collect()
}

/// Split a single public URL into hostname and port
pub fn split_url(raw: &str) -> Result<HostPort> {
    let parse_error = |reason: String| ResolveError::Parse {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| parse_error(e.to_string()))?;

    let hostname = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(ip)) => ip.to_string(),
        // Brackets are URL syntax, not part of the address
        Some(Host::Ipv6(ip)) => ip.to_string(),
        _ => return Err(parse_error("missing host".to_string())),
    };

    // Only an explicit port counts; `https://x.ngrok.io` has none
    let port = url.port().map(|port| port.to_string()).unwrap_or_default();

    Ok(HostPort { hostname, port })
}
