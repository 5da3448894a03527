#![allow(clippy::unwrap_used, dead_code)]
// Shared test support: a descriptor pool mirroring the dish's reflected
// schema, canned replies, and a scripted fake of the link seam.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use prost::Message as _;
use prost_reflect::{DescriptorPool, DynamicMessage, Value};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, field_descriptor_proto,
};

use dishy_core::{Connector, DeviceLink, DeviceRequest};

// ── Descriptor pool ─────────────────────────────────────────────────

fn field(
    name: &str,
    number: i32,
    kind: field_descriptor_proto::Type,
    type_name: Option<&str>,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_owned()),
        number: Some(number),
        label: Some(field_descriptor_proto::Label::Optional as i32),
        r#type: Some(kind as i32),
        type_name: type_name.map(ToOwned::to_owned),
        ..Default::default()
    }
}

fn scalar(name: &str, number: i32, kind: field_descriptor_proto::Type) -> FieldDescriptorProto {
    field(name, number, kind, None)
}

fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    field(
        name,
        number,
        field_descriptor_proto::Type::Message,
        Some(type_name),
    )
}

/// Build the subset of `SpaceX.API.Device` these tests exercise.
///
/// The `DishAlerts` wire numbers are deliberately shuffled relative to
/// the client's declaration order, so ordering assertions prove the
/// decoder does not follow wire layout.
pub fn pool() -> DescriptorPool {
    use field_descriptor_proto::Type;

    let device_info = DescriptorProto {
        name: Some("DeviceInfo".to_owned()),
        field: vec![
            scalar("id", 1, Type::String),
            scalar("hardware_version", 2, Type::String),
            scalar("software_version", 3, Type::String),
            scalar("country_code", 4, Type::String),
            scalar("utc_offset_s", 5, Type::Int32),
        ],
        ..Default::default()
    };

    let get_device_info_response = DescriptorProto {
        name: Some("GetDeviceInfoResponse".to_owned()),
        field: vec![message_field(
            "device_info",
            1,
            ".SpaceX.API.Device.DeviceInfo",
        )],
        ..Default::default()
    };

    let device_state = DescriptorProto {
        name: Some("DeviceState".to_owned()),
        field: vec![scalar("uptime_s", 1, Type::Uint64)],
        ..Default::default()
    };

    let outage = DescriptorProto {
        name: Some("DishOutage".to_owned()),
        field: vec![field(
            "cause",
            1,
            Type::Enum,
            Some(".SpaceX.API.Device.DishOutage.Cause"),
        )],
        enum_type: vec![EnumDescriptorProto {
            name: Some("Cause".to_owned()),
            value: [
                ("UNKNOWN", 0),
                ("BOOTING", 1),
                ("STOWED", 2),
                ("THERMAL_SHUTDOWN", 3),
                ("NO_SCHEDULE", 4),
                ("NO_SATS", 5),
                ("OBSTRUCTED", 6),
                ("NO_DOWNLINK", 7),
                ("NO_PINGS", 8),
            ]
            .iter()
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some((*name).to_owned()),
                number: Some(*number),
                ..Default::default()
            })
            .collect(),
            ..Default::default()
        }],
        ..Default::default()
    };

    let obstruction_stats = DescriptorProto {
        name: Some("DishObstructionStats".to_owned()),
        field: vec![
            scalar("currently_obstructed", 1, Type::Bool),
            scalar("fraction_obstructed", 2, Type::Float),
        ],
        ..Default::default()
    };

    let alerts = DescriptorProto {
        name: Some("DishAlerts".to_owned()),
        field: vec![
            scalar("thermal_throttle", 1, Type::Bool),
            scalar("slow_ethernet_speeds", 2, Type::Bool),
            scalar("motors_stuck", 3, Type::Bool),
            scalar("mast_not_near_vertical", 4, Type::Bool),
            scalar("thermal_shutdown", 5, Type::Bool),
            scalar("unexpected_location", 6, Type::Bool),
        ],
        ..Default::default()
    };

    let dish_get_status_response = DescriptorProto {
        name: Some("DishGetStatusResponse".to_owned()),
        field: vec![
            message_field("device_state", 1, ".SpaceX.API.Device.DeviceState"),
            message_field("outage", 2, ".SpaceX.API.Device.DishOutage"),
            message_field(
                "obstruction_stats",
                3,
                ".SpaceX.API.Device.DishObstructionStats",
            ),
            message_field("alerts", 4, ".SpaceX.API.Device.DishAlerts"),
            scalar("pop_ping_drop_rate", 5, Type::Float),
            scalar("pop_ping_latency_ms", 6, Type::Float),
            scalar("downlink_throughput_bps", 7, Type::Float),
            scalar("uplink_throughput_bps", 8, Type::Float),
            scalar("boresight_azimuth_deg", 9, Type::Float),
            scalar("boresight_elevation_deg", 10, Type::Float),
        ],
        ..Default::default()
    };

    let file = FileDescriptorProto {
        name: Some("spacex/api/device/dish.proto".to_owned()),
        package: Some("SpaceX.API.Device".to_owned()),
        syntax: Some("proto3".to_owned()),
        message_type: vec![
            device_info,
            get_device_info_response,
            device_state,
            outage,
            obstruction_stats,
            alerts,
            dish_get_status_response,
        ],
        ..Default::default()
    };

    let set = FileDescriptorSet { file: vec![file] };
    DescriptorPool::decode(set.encode_to_vec().as_slice()).unwrap()
}

// ── Canned replies ──────────────────────────────────────────────────

pub fn new_message(pool: &DescriptorPool, name: &str) -> DynamicMessage {
    let descriptor = pool
        .get_message_by_name(&format!("SpaceX.API.Device.{name}"))
        .unwrap();
    DynamicMessage::new(descriptor)
}

pub fn info_reply(pool: &DescriptorPool) -> DynamicMessage {
    let mut info = new_message(pool, "DeviceInfo");
    info.set_field_by_name("id", Value::String("ut01000000-00000000-00abcdef".to_owned()));
    info.set_field_by_name("hardware_version", Value::String("rev2_proto3".to_owned()));
    info.set_field_by_name("software_version", Value::String("2026.04.15.mr12345".to_owned()));
    info.set_field_by_name("country_code", Value::String("US".to_owned()));
    info.set_field_by_name("utc_offset_s", Value::I32(-18000));

    let mut reply = new_message(pool, "GetDeviceInfoResponse");
    reply.set_field_by_name("device_info", Value::Message(info));
    reply
}

/// A healthy, connected status reply with plausible numbers.
pub fn healthy_status(pool: &DescriptorPool) -> DynamicMessage {
    let mut state = new_message(pool, "DeviceState");
    state.set_field_by_name("uptime_s", Value::U64(86_400));

    let mut status = new_message(pool, "DishGetStatusResponse");
    status.set_field_by_name("device_state", Value::Message(state));
    status.set_field_by_name("pop_ping_drop_rate", Value::F32(0.01));
    status.set_field_by_name("pop_ping_latency_ms", Value::F32(25.0));
    status.set_field_by_name("downlink_throughput_bps", Value::F32(93_000_000.0));
    status.set_field_by_name("uplink_throughput_bps", Value::F32(21_000_000.0));
    status.set_field_by_name("boresight_azimuth_deg", Value::F32(12.5));
    status.set_field_by_name("boresight_elevation_deg", Value::F32(64.4));
    status
}

pub fn outage_status(pool: &DescriptorPool, cause: i32) -> DynamicMessage {
    let mut outage = new_message(pool, "DishOutage");
    outage.set_field_by_name("cause", Value::EnumNumber(cause));

    let mut status = healthy_status(pool);
    status.set_field_by_name("outage", Value::Message(outage));
    status
}

pub fn alerts_status(pool: &DescriptorPool, raised: &[&str]) -> DynamicMessage {
    let mut alerts = new_message(pool, "DishAlerts");
    for name in raised {
        alerts.set_field_by_name(name, Value::Bool(true));
    }

    let mut status = healthy_status(pool);
    status.set_field_by_name("alerts", Value::Message(alerts));
    status
}

// ── Fake link seam ──────────────────────────────────────────────────

pub struct FakeState {
    pub opens: usize,
    pub addresses: Vec<String>,
    pub closed: usize,
    pub requests: Vec<DeviceRequest>,
    pub fail_next_status: bool,
    pub info_reply: DynamicMessage,
    pub status_reply: DynamicMessage,
}

pub type SharedState = Arc<Mutex<FakeState>>;

pub struct FakeConnector {
    state: SharedState,
    fail_open: bool,
}

impl FakeConnector {
    pub fn new(pool: &DescriptorPool) -> (Self, SharedState) {
        let state = Arc::new(Mutex::new(FakeState {
            opens: 0,
            addresses: Vec::new(),
            closed: 0,
            requests: Vec::new(),
            fail_next_status: false,
            info_reply: info_reply(pool),
            status_reply: healthy_status(pool),
        }));
        (
            Self {
                state: Arc::clone(&state),
                fail_open: false,
            },
            state,
        )
    }

    /// A connector whose every `open` fails like an unreachable dish.
    pub fn unreachable(pool: &DescriptorPool) -> (Self, SharedState) {
        let (mut connector, state) = Self::new(pool);
        connector.fail_open = true;
        (connector, state)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn open(
        &self,
        address: &str,
        _timeout: Duration,
    ) -> Result<Box<dyn DeviceLink>, dishy_api::Error> {
        let mut state = self.state.lock().unwrap();
        state.opens += 1;
        state.addresses.push(address.to_owned());
        if self.fail_open {
            return Err(dishy_api::Error::Reflection {
                message: "injected: dish unreachable".to_owned(),
            });
        }
        drop(state);
        Ok(Box::new(FakeLink {
            state: Arc::clone(&self.state),
        }))
    }
}

struct FakeLink {
    state: SharedState,
}

#[async_trait]
impl DeviceLink for FakeLink {
    async fn handle(&mut self, request: DeviceRequest) -> Result<DynamicMessage, dishy_api::Error> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        match request {
            DeviceRequest::GetDeviceInfo => Ok(state.info_reply.clone()),
            DeviceRequest::GetStatus => {
                if state.fail_next_status {
                    state.fail_next_status = false;
                    Err(dishy_api::Error::Reflection {
                        message: "injected: status fetch failed".to_owned(),
                    })
                } else {
                    Ok(state.status_reply.clone())
                }
            }
        }
    }
}

impl Drop for FakeLink {
    fn drop(&mut self) {
        self.state.lock().unwrap().closed += 1;
    }
}
