// ── Status snapshot ──

use prost_reflect::{DynamicMessage, Value};

use crate::error::DishError;
use crate::model::{DishAlert, OutageReason};

/// One immutable decoded view of the dish's status.
///
/// Constructed by `refresh()` from a raw `dish_get_status` reply and
/// never mutated afterwards: refreshing again produces a new snapshot,
/// so older ones stay valid as point-in-time views.
///
/// The `Debug` form prints the full raw reply, including any field this
/// client has no typed accessor for.
#[derive(Debug, Clone)]
pub struct DishStatus {
    raw: DynamicMessage,
}

impl DishStatus {
    pub(crate) fn new(raw: DynamicMessage) -> Self {
        Self { raw }
    }

    /// The raw reply, for fields this client does not decode.
    pub fn raw(&self) -> &DynamicMessage {
        &self.raw
    }

    /// `true` iff the reply carries no outage record.
    pub fn connected(&self) -> bool {
        !self.raw.has_field_by_name("outage")
    }

    /// Why the dish is offline; `None` while connected.
    ///
    /// An outage cause code this client does not know is reported as a
    /// decode error rather than mapped to a default -- newer firmware
    /// can introduce codes, and guessing would misreport device state.
    pub fn outage_reason(&self) -> Result<Option<OutageReason>, DishError> {
        if self.connected() {
            return Ok(None);
        }

        let code = self
            .message_field("outage")
            .and_then(|outage| {
                outage
                    .get_field_by_name("cause")
                    .and_then(|value| value.as_enum_number())
            })
            .unwrap_or(0);

        OutageReason::from_code(code)
            .map(Some)
            .ok_or(DishError::Decode {
                field: "outage.cause",
                value: i64::from(code),
            })
    }

    /// Whether something is currently blocking the dish's view of the sky.
    pub fn obstructed(&self) -> bool {
        self.message_field("obstruction_stats")
            .and_then(|stats| {
                stats
                    .get_field_by_name("currently_obstructed")
                    .and_then(|value| value.as_bool())
            })
            .unwrap_or(false)
    }

    /// Fraction of the sky view obstructed over the sampling window, in `[0, 1]`.
    pub fn fraction_obstructed(&self) -> f64 {
        self.message_field("obstruction_stats")
            .map_or(0.0, |stats| float_field(&stats, "fraction_obstructed"))
    }

    /// Seconds since the dish last booted.
    pub fn uptime_s(&self) -> u64 {
        self.message_field("device_state")
            .and_then(|state| {
                state
                    .get_field_by_name("uptime_s")
                    .and_then(|value| value.as_u64())
            })
            .unwrap_or_default()
    }

    /// Fraction of pings to the point of presence currently dropped, in `[0, 1]`.
    pub fn pop_ping_drop_rate(&self) -> f64 {
        float_field(&self.raw, "pop_ping_drop_rate")
    }

    /// Round-trip latency to the point of presence, in milliseconds.
    pub fn pop_ping_latency_ms(&self) -> f64 {
        float_field(&self.raw, "pop_ping_latency_ms")
    }

    /// Current downlink throughput as reported by the dish.
    ///
    /// Upstream never documents whether this is bits or bytes per
    /// second; the raw number is passed through unconverted.
    pub fn downlink_throughput_bps(&self) -> f64 {
        float_field(&self.raw, "downlink_throughput_bps")
    }

    /// Current uplink throughput as reported by the dish.
    ///
    /// Same unit caveat as [`downlink_throughput_bps`](Self::downlink_throughput_bps).
    pub fn uplink_throughput_bps(&self) -> f64 {
        float_field(&self.raw, "uplink_throughput_bps")
    }

    /// Boresight azimuth, in degrees.
    pub fn boresight_azimuth_deg(&self) -> f64 {
        float_field(&self.raw, "boresight_azimuth_deg")
    }

    /// Boresight elevation, in degrees.
    pub fn boresight_elevation_deg(&self) -> f64 {
        float_field(&self.raw, "boresight_elevation_deg")
    }

    /// Active alerts, in [`DishAlert::ALL`] order.
    pub fn alerts(&self) -> Vec<DishAlert> {
        self.message_field("alerts")
            .map_or_else(Vec::new, |alerts| DishAlert::from_source(&alerts))
    }

    fn message_field(&self, name: &str) -> Option<DynamicMessage> {
        self.raw
            .get_field_by_name(name)
            .and_then(|value| value.as_message().cloned())
    }
}

/// Widen a float-typed wire field to `f64`; unset or non-float reads as 0.
fn float_field(message: &DynamicMessage, name: &str) -> f64 {
    message.get_field_by_name(name).map_or(0.0, |value| {
        match *value {
            Value::F32(x) => f64::from(x),
            Value::F64(x) => x,
            _ => 0.0,
        }
    })
}
