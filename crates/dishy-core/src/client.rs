// ── Async dish client ──
//
// The connection state machine lives here; the blocking client in
// `blocking.rs` is a thin runtime-owning facade over it.

use tracing::{debug, info, warn};

use crate::config::DishConfig;
use crate::error::DishError;
use crate::link::{Connector, DeviceLink, DeviceRequest, GrpcConnector};
use crate::model::{DeviceInfo, DishStatus};

/// Non-blocking client for one dish.
///
/// Suspends the calling task for the duration of each network exchange
/// instead of blocking a thread. Unlike [`Dish`](crate::Dish) there is
/// no implicit autoconnect: `connect()` must be called before any
/// status or device-info access, and a guarded call while disconnected
/// fails with [`DishError::NotConnected`].
///
/// One instance owns exactly one channel; `&mut self` receivers mean a
/// caller cannot have two exchanges in flight on the same instance.
pub struct AsyncDish {
    config: DishConfig,
    connector: Box<dyn Connector>,
    link: Option<Box<dyn DeviceLink>>,
    device_info: Option<DeviceInfo>,
    status: Option<DishStatus>,
}

impl AsyncDish {
    /// Client for the dish at `config.address`. Does not connect.
    pub fn new(config: DishConfig) -> Self {
        Self::with_connector(config, Box::new(GrpcConnector))
    }

    /// Client with a custom [`Connector`] -- the seam used by tests and
    /// by anything that wants to interpose on link establishment.
    pub fn with_connector(config: DishConfig, connector: Box<dyn Connector>) -> Self {
        if config.autoconnect {
            warn!("autoconnect is ignored on AsyncDish; call connect() explicitly");
        }
        Self::assemble(config, connector)
    }

    /// Constructor shared with the blocking facade, which supports
    /// autoconnect and therefore must not warn about it.
    pub(crate) fn assemble(config: DishConfig, connector: Box<dyn Connector>) -> Self {
        Self {
            config,
            connector,
            link: None,
            device_info: None,
            status: None,
        }
    }

    pub fn config(&self) -> &DishConfig {
        &self.config
    }

    /// `true` iff a channel is currently held.
    pub fn connected(&self) -> bool {
        self.link.is_some()
    }

    /// The snapshot stored by the most recent `refresh()`, if any.
    pub fn status(&self) -> Option<&DishStatus> {
        self.status.as_ref()
    }

    /// Open a channel, discover the schema, fetch device identity, then
    /// fetch an initial status snapshot.
    ///
    /// Calling this while already connected re-opens the channel and
    /// re-discovers the schema; call [`close`](Self::close) first if
    /// reconnection semantics matter to you.
    pub async fn connect(&mut self) -> Result<(), DishError> {
        self.connect_inner(true).await
    }

    /// [`connect`](Self::connect) without the trailing status fetch;
    /// [`status`](Self::status) stays `None` until the first
    /// [`refresh`](Self::refresh).
    pub async fn connect_without_refresh(&mut self) -> Result<(), DishError> {
        self.connect_inner(false).await
    }

    async fn connect_inner(&mut self, refresh: bool) -> Result<(), DishError> {
        info!(address = %self.config.address, "connecting to dish");
        let mut link = self
            .connector
            .open(&self.config.address, self.config.timeout)
            .await?;

        let reply = link.handle(DeviceRequest::GetDeviceInfo).await?;
        self.device_info = Some(DeviceInfo::from_reply(&reply));
        self.link = Some(link);
        debug!("connected, device identity stored");

        if refresh {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Fetch an up-to-date status snapshot, store it as current, and
    /// return it. Each call yields a distinct snapshot; snapshots
    /// returned earlier are unaffected.
    pub async fn refresh(&mut self) -> Result<DishStatus, DishError> {
        let link = self.link.as_mut().ok_or(DishError::NotConnected)?;
        let reply = link.handle(DeviceRequest::GetStatus).await?;
        let status = DishStatus::new(reply);
        self.status = Some(status.clone());
        Ok(status)
    }

    /// Device identity fetched during `connect()`.
    pub fn device_info(&self) -> Result<&DeviceInfo, DishError> {
        if !self.connected() {
            return Err(DishError::NotConnected);
        }
        self.device_info.as_ref().ok_or(DishError::NotConnected)
    }

    pub fn hardware_version(&self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.hardware_version)
    }

    pub fn software_version(&self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.software_version)
    }

    pub fn country_code(&self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.country_code)
    }

    pub fn utc_offset_s(&self) -> Result<i32, DishError> {
        Ok(self.device_info()?.utc_offset_s)
    }

    pub fn id(&self) -> Result<&str, DishError> {
        Ok(&self.device_info()?.id)
    }

    /// Release the channel. Idempotent and infallible: the handle is
    /// cleared unconditionally, and dropping the client does the same
    /// on every exit path.
    pub fn close(&mut self) {
        if self.link.take().is_some() {
            debug!("channel released");
        }
    }
}
