// ── Dish alerts ──

use prost_reflect::DynamicMessage;
use serde::Serialize;

/// A condition preventing the dish from operating normally.
///
/// The wire carries these as individual boolean flags on the `alerts`
/// sub-message; a status reply can raise any number of them at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DishAlert {
    MotorsStuck,
    ThermalThrottle,
    ThermalShutdown,
    MastNotNearVertical,
    UnexpectedLocation,
    SlowEthernetSpeeds,
}

impl DishAlert {
    /// Every alert, in declaration order. [`from_source`](Self::from_source)
    /// reports active alerts in this order regardless of wire layout.
    pub const ALL: [Self; 6] = [
        Self::MotorsStuck,
        Self::ThermalThrottle,
        Self::ThermalShutdown,
        Self::MastNotNearVertical,
        Self::UnexpectedLocation,
        Self::SlowEthernetSpeeds,
    ];

    /// Name of the boolean flag carrying this alert on the wire.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::MotorsStuck => "motors_stuck",
            Self::ThermalThrottle => "thermal_throttle",
            Self::ThermalShutdown => "thermal_shutdown",
            Self::MastNotNearVertical => "mast_not_near_vertical",
            Self::UnexpectedLocation => "unexpected_location",
            Self::SlowEthernetSpeeds => "slow_ethernet_speeds",
        }
    }

    /// Reverse lookup from a wire flag name.
    pub fn from_field(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alert| alert.field_name() == name)
    }

    /// Short human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            Self::MotorsStuck => "Dish motors stuck",
            Self::ThermalThrottle => "Throttled due to temperature",
            Self::ThermalShutdown => "Shutdown due to thermal conditions",
            Self::MastNotNearVertical => "Mast is not near vertical",
            Self::UnexpectedLocation => "Unexpected location",
            Self::SlowEthernetSpeeds => "Ethernet connection to dish too slow",
        }
    }

    /// Collect the active alerts from a raw `alerts` sub-message.
    ///
    /// Tests each known flag on the raw record and returns those that
    /// are set, in [`ALL`](Self::ALL) order -- deterministic and
    /// directly comparable across calls.
    pub fn from_source(source: &DynamicMessage) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|alert| {
                source
                    .get_field_by_name(alert.field_name())
                    .and_then(|value| value.as_bool())
                    .unwrap_or(false)
            })
            .collect()
    }
}
