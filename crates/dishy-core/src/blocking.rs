// ── Blocking dish client ──

use tracing::debug;

use crate::client::AsyncDish;
use crate::config::DishConfig;
use crate::error::DishError;
use crate::link::{Connector, GrpcConnector};
use crate::model::{DeviceInfo, DishStatus};

/// Blocking client for one dish.
///
/// Same state machine as [`AsyncDish`], driven on an internal
/// current-thread runtime: every call occupies the caller until the
/// network exchange completes. Do not use from inside an async context;
/// use [`AsyncDish`] there instead.
///
/// This is the variant that honors `autoconnect`: with it enabled,
/// `refresh()` and the device-info accessors connect implicitly on
/// first use. With it disabled (the default), they fail with
/// [`DishError::NotConnected`] until [`connect`](Self::connect) is
/// called -- without touching the network.
///
/// The channel is released when the client is dropped, on every exit
/// path; [`close`](Self::close) releases it earlier.
pub struct Dish {
    runtime: tokio::runtime::Runtime,
    inner: AsyncDish,
}

impl Dish {
    /// Client for the dish at `config.address`. Does not connect.
    pub fn new(config: DishConfig) -> Result<Self, DishError> {
        Self::with_connector(config, Box::new(GrpcConnector))
    }

    /// Client with a custom [`Connector`]; see
    /// [`AsyncDish::with_connector`].
    pub fn with_connector(
        config: DishConfig,
        connector: Box<dyn Connector>,
    ) -> Result<Self, DishError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            inner: AsyncDish::assemble(config, connector),
        })
    }

    pub fn config(&self) -> &DishConfig {
        self.inner.config()
    }

    /// `true` iff a channel is currently held.
    pub fn connected(&self) -> bool {
        self.inner.connected()
    }

    /// The snapshot stored by the most recent `refresh()`, if any.
    pub fn status(&self) -> Option<&DishStatus> {
        self.inner.status()
    }

    /// Open a channel, discover the schema, fetch device identity, then
    /// fetch an initial status snapshot. See [`AsyncDish::connect`].
    pub fn connect(&mut self) -> Result<(), DishError> {
        self.runtime.block_on(self.inner.connect())
    }

    /// [`connect`](Self::connect) without the trailing status fetch.
    pub fn connect_without_refresh(&mut self) -> Result<(), DishError> {
        self.runtime.block_on(self.inner.connect_without_refresh())
    }

    /// Fetch an up-to-date status snapshot, store it as current, and
    /// return it. Autoconnects first if enabled.
    pub fn refresh(&mut self) -> Result<DishStatus, DishError> {
        self.ensure_connected()?;
        self.runtime.block_on(self.inner.refresh())
    }

    /// Device identity fetched during `connect()`. Autoconnects first
    /// if enabled.
    pub fn device_info(&mut self) -> Result<&DeviceInfo, DishError> {
        self.ensure_connected()?;
        self.inner.device_info()
    }

    pub fn hardware_version(&mut self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.hardware_version)
    }

    pub fn software_version(&mut self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.software_version)
    }

    pub fn country_code(&mut self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.country_code)
    }

    pub fn utc_offset_s(&mut self) -> Result<i32, DishError> {
        Ok(self.device_info()?.utc_offset_s)
    }

    pub fn id(&mut self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.id)
    }

    /// Release the channel. Idempotent and infallible.
    pub fn close(&mut self) {
        self.inner.close();
    }

    /// The autoconnect guard. Applies to every status and device-info
    /// operation, never to `connect`/`close` themselves.
    fn ensure_connected(&mut self) -> Result<(), DishError> {
        if self.inner.connected() {
            return Ok(());
        }
        if self.inner.config().autoconnect {
            debug!("not connected, autoconnecting");
            return self.connect();
        }
        Err(DishError::NotConnected)
    }
}
