use thiserror::Error;

/// Top-level error type for the `dishy-api` crate.
///
/// Covers every failure mode of the raw transport: channel setup,
/// reflection-based schema discovery, and the request/response exchange.
/// `dishy-core` wraps all of these into its single communication error.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Channel-level failure (connection refused, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// The dish answered an RPC with a non-OK status.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),

    // ── Schema discovery ────────────────────────────────────────────
    /// The reflection exchange itself went wrong (bad reply shape,
    /// undecodable descriptors, reflection error response).
    #[error("schema discovery failed: {message}")]
    Reflection { message: String },

    /// Discovery succeeded but the resolved schema is missing a symbol
    /// this client needs (service, method, or envelope field).
    #[error("device schema has no {symbol:?}")]
    Schema { symbol: String },
}

impl Error {
    /// Returns `true` if the failure looks like the dish being
    /// unreachable rather than a protocol-level problem.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rpc(status) => matches!(
                status.code(),
                tonic::Code::Unavailable | tonic::Code::DeadlineExceeded
            ),
            _ => false,
        }
    }
}
