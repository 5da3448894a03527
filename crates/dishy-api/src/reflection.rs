// gRPC server reflection consumer.
//
// The dish serves the v1alpha reflection protocol. One request per
// stream keeps the exchange trivially request/response shaped; the
// transitive-dependency loop below covers servers that return only the
// directly requested file instead of the full closure.

use std::collections::BTreeMap;

use prost::Message as _;
use prost_reflect::DescriptorPool;
use prost_types::{FileDescriptorProto, FileDescriptorSet};
use tonic::transport::Channel;
use tonic_reflection::pb::v1alpha::{
    ServerReflectionRequest, server_reflection_client::ServerReflectionClient,
    server_reflection_request::MessageRequest, server_reflection_response::MessageResponse,
};
use tracing::debug;

use crate::error::Error;

/// Client for the reflection service, used once per `connect()` to
/// build a descriptor pool and then discarded along with its channel.
pub struct ReflectionClient {
    inner: ServerReflectionClient<Channel>,
}

impl ReflectionClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: ServerReflectionClient::new(channel),
        }
    }

    /// Resolve the file containing `symbol` plus all transitive imports
    /// into a descriptor pool.
    pub async fn load_pool(&mut self, symbol: &str) -> Result<DescriptorPool, Error> {
        let mut files: BTreeMap<String, FileDescriptorProto> = BTreeMap::new();

        let initial = self
            .request(MessageRequest::FileContainingSymbol(symbol.to_owned()))
            .await?;
        for file in initial {
            files.insert(file.name().to_owned(), file);
        }

        // Fetch any imported file the server did not volunteer.
        loop {
            let missing: Vec<String> = files
                .values()
                .flat_map(|f| f.dependency.iter())
                .filter(|dep| !files.contains_key(*dep))
                .cloned()
                .collect();
            if missing.is_empty() {
                break;
            }
            for name in missing {
                let fetched = self
                    .request(MessageRequest::FileByFilename(name.clone()))
                    .await?;
                if fetched.is_empty() {
                    return Err(Error::Reflection {
                        message: format!("server returned no descriptor for import {name:?}"),
                    });
                }
                for file in fetched {
                    files.insert(file.name().to_owned(), file);
                }
            }
        }

        debug!(symbol, files = files.len(), "descriptor closure resolved");

        let set = FileDescriptorSet {
            file: files.into_values().collect(),
        };
        DescriptorPool::decode(set.encode_to_vec().as_slice()).map_err(|e| Error::Reflection {
            message: format!("descriptor pool rejected reflected files: {e}"),
        })
    }

    /// Issue one reflection request and collect the file descriptors in
    /// the reply.
    async fn request(&mut self, req: MessageRequest) -> Result<Vec<FileDescriptorProto>, Error> {
        let request = ServerReflectionRequest {
            host: String::new(),
            message_request: Some(req),
        };

        let mut stream = self
            .inner
            .server_reflection_info(tokio_stream::once(request))
            .await?
            .into_inner();

        let reply = stream.message().await?.ok_or_else(|| Error::Reflection {
            message: "reflection stream closed without a reply".to_owned(),
        })?;

        match reply.message_response {
            Some(MessageResponse::FileDescriptorResponse(files)) => files
                .file_descriptor_proto
                .iter()
                .map(|bytes| {
                    FileDescriptorProto::decode(bytes.as_slice()).map_err(|e| Error::Reflection {
                        message: format!("undecodable file descriptor: {e}"),
                    })
                })
                .collect(),
            Some(MessageResponse::ErrorResponse(err)) => Err(Error::Reflection {
                message: format!(
                    "reflection error {}: {}",
                    err.error_code, err.error_message
                ),
            }),
            other => Err(Error::Reflection {
                message: format!("unexpected reflection reply: {other:?}"),
            }),
        }
    }
}
