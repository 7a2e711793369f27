//! Test doubles: throwaway HTTP servers standing in for the ngrok web
//! interface, and an in-memory resolver.

use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::resolver::Resolve;

/// Resolver answering from a fixed table; unknown hosts fail the lookup
#[derive(Debug, Default)]
pub struct StubResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hostname: &str, ips: &[&str]) -> Self {
        let ips = ips.iter().map(|ip| ip.parse().unwrap()).collect();
        self.hosts.insert(hostname.to_string(), ips);
        self
    }
}

impl Resolve for StubResolver {
    async fn lookup(&self, hostname: &str) -> io::Result<Vec<IpAddr>> {
        self.hosts.get(hostname).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such host: {}", hostname),
            )
        })
    }
}

/// Serve a single response with the given status line and body, then close
pub async fn serve_once(status: &str, body: &str) -> SocketAddr {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    serve_raw(response).await
}

/// Serve a response whose body is shorter than its advertised length
pub async fn serve_truncated() -> SocketAddr {
    serve_raw(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"tunn"
            .to_string(),
    )
    .await
}

/// A local port with nothing listening on it
pub async fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

async fn serve_raw(response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request_head(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });

    addr
}

async fn read_request_head(stream: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
}
