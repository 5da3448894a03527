// ── Device link seam ──
//
// The manager's state machine depends on these traits, not on tonic:
// "open a connection and bind the schema" and "issue one of the two
// known requests". Tests drive the state machine through fakes; the
// production impl below assembles the dishy-api pieces.

use std::time::Duration;

use async_trait::async_trait;
use prost_reflect::{DynamicMessage, ReflectMessage};
use tracing::debug;

use dishy_api::{DEVICE_SERVICE, DeviceSchema, RawDeviceClient, ReflectionClient, transport};

/// The two logical requests this client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRequest {
    GetDeviceInfo,
    GetStatus,
}

impl DeviceRequest {
    /// Envelope field that carries the request on the wire.
    pub fn request_field(self) -> &'static str {
        match self {
            Self::GetDeviceInfo => "get_device_info",
            Self::GetStatus => "get_status",
        }
    }

    /// Envelope field that carries the matching reply.
    pub fn response_field(self) -> &'static str {
        match self {
            Self::GetDeviceInfo => "get_device_info",
            Self::GetStatus => "dish_get_status",
        }
    }
}

/// An established, schema-bound connection to one dish.
///
/// `handle` returns the reply already unwrapped from the response
/// envelope (the sub-message named by
/// [`DeviceRequest::response_field`]).
#[async_trait]
pub trait DeviceLink: Send {
    async fn handle(&mut self, request: DeviceRequest) -> Result<DynamicMessage, dishy_api::Error>;
}

/// Opens device links. One call per `connect()`; the returned link owns
/// its channel exclusively until dropped.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(
        &self,
        address: &str,
        timeout: Duration,
    ) -> Result<Box<dyn DeviceLink>, dishy_api::Error>;
}

/// Production connector: reflection-based schema discovery on a
/// short-lived channel, then a fresh data-plane channel for the
/// lifetime of the link.
#[derive(Debug, Default)]
pub struct GrpcConnector;

#[async_trait]
impl Connector for GrpcConnector {
    async fn open(
        &self,
        address: &str,
        timeout: Duration,
    ) -> Result<Box<dyn DeviceLink>, dishy_api::Error> {
        // The discovery channel exists only long enough to resolve the
        // descriptor pool.
        let pool = {
            let discovery = transport::connect(address, timeout).await?;
            ReflectionClient::new(discovery)
                .load_pool(DEVICE_SERVICE)
                .await?
        };
        let schema = DeviceSchema::resolve(&pool)?;
        debug!(%address, "device schema bound");

        let channel = transport::connect(address, timeout).await?;
        Ok(Box::new(GrpcLink {
            client: RawDeviceClient::new(channel, schema),
        }))
    }
}

struct GrpcLink {
    client: RawDeviceClient,
}

#[async_trait]
impl DeviceLink for GrpcLink {
    async fn handle(&mut self, request: DeviceRequest) -> Result<DynamicMessage, dishy_api::Error> {
        let envelope = self.client.schema().envelope(request.request_field())?;
        let reply = self.client.handle(envelope).await?;

        let field = reply
            .descriptor()
            .get_field_by_name(request.response_field())
            .ok_or_else(|| dishy_api::Error::Schema {
                symbol: format!(
                    "{}.{}",
                    reply.descriptor().full_name(),
                    request.response_field()
                ),
            })?;

        reply
            .get_field(&field)
            .as_message()
            .cloned()
            .ok_or_else(|| dishy_api::Error::Schema {
                symbol: format!(
                    "{}.{}",
                    reply.descriptor().full_name(),
                    request.response_field()
                ),
            })
    }
}
