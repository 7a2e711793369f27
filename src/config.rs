//! Connection settings for the tunnel manager's local web interface.
//!
//! Built once from the command line and handed to the pipeline by reference.

/// Default host of the ngrok web interface
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the ngrok web interface
pub const DEFAULT_PORT: u16 = 4040;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// URL of the endpoint listing active tunnels
    pub fn api_url(&self) -> String {
        format!("http://{}:{}/api/tunnels", self.host, self.port)
    }
}
