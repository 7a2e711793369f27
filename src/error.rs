use thiserror::Error;

/// Failures of the tunnel resolution pipeline.
///
/// Every variant is fatal: the first one raised aborts the run. Messages
/// leave out the underlying cause; print with `{:#}` through `anyhow` to
/// get the whole chain on one line.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "failed to reach the tunnel manager at {url}, \
         please make sure at least one instance of ngrok is running"
    )]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read tunnel manager response")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode tunnel manager response")]
    Decode(#[from] serde_json::Error),

    #[error("invalid public URL '{url}': {reason}")]
    Parse { url: String, reason: String },

    #[error("failed to resolve {hostname}")]
    Resolution {
        hostname: String,
        #[source]
        source: std::io::Error,
    },

    #[error("when resolving {0}, no ips could be found")]
    NoAddress(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
