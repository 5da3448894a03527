use thiserror::Error;

/// Error type for dish operations.
#[derive(Debug, Error)]
pub enum DishError {
    /// Any transport-layer failure while talking to the dish: channel
    /// setup, schema discovery, or a request/response exchange. The
    /// root cause is retained for diagnostics; nothing is retried here.
    #[error("communication with the dish failed: {source}")]
    Communication {
        #[from]
        source: dishy_api::Error,
    },

    /// A guarded operation was invoked while disconnected and
    /// autoconnect is off. Purely local -- no network activity happened.
    #[error("not connected: connect() must be called first")]
    NotConnected,

    /// The dish reported a wire value this client does not recognize.
    /// Usually means newer firmware; failing beats misreporting state.
    #[error("unrecognized {field} value {value}")]
    Decode { field: &'static str, value: i64 },

    /// The blocking client could not start its internal runtime.
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl DishError {
    /// Returns `true` if this failure came from the transport layer
    /// and a retry by the caller might succeed.
    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }
}
