// ── Device identity ──

use prost_reflect::DynamicMessage;
use serde::Serialize;

/// Static device identity, fetched once per `connect()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub id: String,
    pub hardware_version: String,
    pub software_version: String,
    pub country_code: String,
    pub utc_offset_s: i32,
}

impl DeviceInfo {
    /// Decode from a raw `get_device_info` reply.
    ///
    /// Fields the firmware does not report decode to their defaults;
    /// identity fields are informational, so leniency is safe here
    /// (unlike status decoding, which refuses unknown codes).
    pub(crate) fn from_reply(reply: &DynamicMessage) -> Self {
        let Some(info) = reply
            .get_field_by_name("device_info")
            .and_then(|value| value.as_message().cloned())
        else {
            return Self::default();
        };

        Self {
            id: text(&info, "id"),
            hardware_version: text(&info, "hardware_version"),
            software_version: text(&info, "software_version"),
            country_code: text(&info, "country_code"),
            utc_offset_s: info
                .get_field_by_name("utc_offset_s")
                .and_then(|value| value.as_i32())
                .unwrap_or_default(),
        }
    }
}

fn text(message: &DynamicMessage, name: &str) -> String {
    message
        .get_field_by_name(name)
        .and_then(|value| value.as_str().map(ToOwned::to_owned))
        .unwrap_or_default()
}
