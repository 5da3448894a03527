// Raw client for the device service's unary `Handle` exchange.

use prost_reflect::DynamicMessage;
use tonic::client::Grpc;
use tonic::transport::Channel;
use tracing::debug;

use crate::codec::DynamicCodec;
use crate::error::Error;
use crate::schema::DeviceSchema;

/// Thin wrapper pairing the data-plane channel with the resolved
/// schema. Issues envelope requests and hands back raw replies; all
/// interpretation happens in `dishy-core`.
pub struct RawDeviceClient {
    inner: Grpc<Channel>,
    schema: DeviceSchema,
}

impl RawDeviceClient {
    pub fn new(channel: Channel, schema: DeviceSchema) -> Self {
        Self {
            inner: Grpc::new(channel),
            schema,
        }
    }

    pub fn schema(&self) -> &DeviceSchema {
        &self.schema
    }

    /// Send one request envelope and await the raw response envelope.
    pub async fn handle(&mut self, request: DynamicMessage) -> Result<DynamicMessage, Error> {
        self.inner.ready().await?;

        debug!(path = %self.schema.path(), "unary exchange");
        let response = self
            .inner
            .unary(
                tonic::Request::new(request),
                self.schema.path().clone(),
                DynamicCodec::new(self.schema.response()),
            )
            .await?;

        Ok(response.into_inner())
    }
}
