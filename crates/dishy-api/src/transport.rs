// Channel construction for the dish's plaintext gRPC endpoint.
//
// The dish listens on a fixed LAN address with no TLS and no auth, so
// there is deliberately no certificate plumbing here -- just endpoint
// assembly and timeouts.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::error::Error;

/// Open a channel to `address` (`host:port`, no scheme).
///
/// Connects eagerly so that an unreachable dish surfaces here rather
/// than on the first RPC. Both the connect and per-request timeouts are
/// set to `timeout`.
pub async fn connect(address: &str, timeout: Duration) -> Result<Channel, Error> {
    let endpoint = Endpoint::from_shared(format!("http://{address}"))?
        .connect_timeout(timeout)
        .timeout(timeout);

    debug!(%address, "opening channel");
    let channel = endpoint.connect().await?;
    Ok(channel)
}
