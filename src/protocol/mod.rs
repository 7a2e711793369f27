//! Data types exchanged with the tunnel manager and passed between
//! pipeline stages.
//!
//! - [`TunnelsResponse`] - JSON body of `GET /api/tunnels`
//! - [`TunnelRecord`], [`HostPort`], [`ResolvedAddress`] - per-tunnel
//!   values, kept index-aligned from one stage to the next

mod messages;
mod records;

pub use messages::*;
pub use records::*;
