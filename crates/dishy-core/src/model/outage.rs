// ── Outage reasons ──

use serde::Serialize;

/// Why the dish currently has no connectivity.
///
/// The discriminants match the cause codes the dish reports in the
/// `outage` sub-message of a status reply. A code outside this set is a
/// decode failure upstream, never silently mapped to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutageReason {
    Unknown,
    Booting,
    Stowed,
    ThermalShutdown,
    NoSchedule,
    NoSats,
    Obstructed,
    NoDownlink,
    NoPings,
}

impl OutageReason {
    /// Every reason, in wire-code order.
    pub const ALL: [Self; 9] = [
        Self::Unknown,
        Self::Booting,
        Self::Stowed,
        Self::ThermalShutdown,
        Self::NoSchedule,
        Self::NoSats,
        Self::Obstructed,
        Self::NoDownlink,
        Self::NoPings,
    ];

    /// Look up a reason by its wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Booting),
            2 => Some(Self::Stowed),
            3 => Some(Self::ThermalShutdown),
            4 => Some(Self::NoSchedule),
            5 => Some(Self::NoSats),
            6 => Some(Self::Obstructed),
            7 => Some(Self::NoDownlink),
            8 => Some(Self::NoPings),
            _ => None,
        }
    }

    /// The cause code the dish reports for this reason.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Booting => 1,
            Self::Stowed => 2,
            Self::ThermalShutdown => 3,
            Self::NoSchedule => 4,
            Self::NoSats => 5,
            Self::Obstructed => 6,
            Self::NoDownlink => 7,
            Self::NoPings => 8,
        }
    }

    /// Short human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Booting => "Dish Booting",
            Self::Stowed => "Stowed",
            Self::ThermalShutdown => "Thermal Shutdown",
            Self::NoSchedule => "Searching",
            Self::NoSats => "No Satellites",
            Self::Obstructed => "Starlink Obstructed",
            Self::NoDownlink => "No Downlink",
            Self::NoPings => "No Pings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for reason in OutageReason::ALL {
            assert_eq!(OutageReason::from_code(reason.code()), Some(reason));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(OutageReason::from_code(9), None);
        assert_eq!(OutageReason::from_code(-1), None);
    }

    #[test]
    fn obstructed_is_code_six() {
        assert_eq!(OutageReason::Obstructed.code(), 6);
        assert_eq!(OutageReason::Obstructed.label(), "Starlink Obstructed");
    }
}
