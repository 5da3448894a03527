// Resolved device schema: the service, its single `Handle` method, and
// the request envelope vocabulary, all obtained from a reflected
// descriptor pool rather than generated code.

use http::uri::PathAndQuery;
use prost_reflect::{DescriptorPool, DynamicMessage, Kind, MessageDescriptor, MethodDescriptor, Value};

use crate::error::Error;

/// Fully-qualified name of the dish's device service.
pub const DEVICE_SERVICE: &str = "SpaceX.API.Device.Device";

/// The service's single request/response entry point.
pub const HANDLE_METHOD: &str = "Handle";

/// The resolved request/response vocabulary for one dish connection.
///
/// Bound per connection, never shared: reconnecting re-resolves the
/// schema, so two managers can talk to dishes on different firmware
/// without interfering.
#[derive(Debug, Clone)]
pub struct DeviceSchema {
    method: MethodDescriptor,
    path: PathAndQuery,
}

impl DeviceSchema {
    /// Locate the device service and its `Handle` method in a reflected
    /// descriptor pool.
    pub fn resolve(pool: &DescriptorPool) -> Result<Self, Error> {
        let service = pool
            .get_service_by_name(DEVICE_SERVICE)
            .ok_or_else(|| Error::Schema {
                symbol: DEVICE_SERVICE.to_owned(),
            })?;

        let method = service
            .methods()
            .find(|m| m.name() == HANDLE_METHOD)
            .ok_or_else(|| Error::Schema {
                symbol: format!("{DEVICE_SERVICE}.{HANDLE_METHOD}"),
            })?;

        let raw_path = format!("/{}/{}", service.full_name(), method.name());
        let path = PathAndQuery::try_from(raw_path.as_str()).map_err(|_| Error::Schema {
            symbol: raw_path,
        })?;

        Ok(Self { method, path })
    }

    /// Descriptor of the request envelope message.
    pub fn request(&self) -> MessageDescriptor {
        self.method.input()
    }

    /// Descriptor of the response envelope message.
    pub fn response(&self) -> MessageDescriptor {
        self.method.output()
    }

    /// gRPC path of the `Handle` method.
    pub fn path(&self) -> &PathAndQuery {
        &self.path
    }

    /// Construct a request envelope with exactly one sub-request set,
    /// e.g. `envelope("get_status")` for the wire equivalent of
    /// `Request { get_status: {} }`.
    pub fn envelope(&self, field: &str) -> Result<DynamicMessage, Error> {
        let request = self.request();
        let descriptor = request
            .get_field_by_name(field)
            .ok_or_else(|| Error::Schema {
                symbol: format!("{}.{field}", request.full_name()),
            })?;

        let Kind::Message(inner) = descriptor.kind() else {
            return Err(Error::Schema {
                symbol: format!("{}.{field}", request.full_name()),
            });
        };

        let mut envelope = DynamicMessage::new(request);
        envelope.set_field(&descriptor, Value::Message(DynamicMessage::new(inner)));
        Ok(envelope)
    }
}
