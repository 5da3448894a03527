// dishy-api: raw gRPC transport for the Starlink user terminal.
//
// The dish does not publish .proto files; its schema is served over gRPC
// server reflection and resolved at runtime. This crate owns everything
// below the domain layer: channel construction, reflection-based schema
// discovery, the dynamic request envelope, and the unary `Handle` exchange.

pub mod client;
pub mod codec;
pub mod error;
pub mod reflection;
pub mod schema;
pub mod transport;

pub use client::RawDeviceClient;
pub use error::Error;
pub use reflection::ReflectionClient;
pub use schema::{DEVICE_SERVICE, DeviceSchema, HANDLE_METHOD};
