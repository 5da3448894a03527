#![allow(clippy::unwrap_used, clippy::float_cmp)]
// Status decoding tests over descriptor-pool-built raw replies.

use pretty_assertions::assert_eq;
use prost_reflect::Value;

use dishy_core::{DishAlert, DishError, DishStatus, OutageReason};

mod support;

fn decode(raw: prost_reflect::DynamicMessage) -> DishStatus {
    // The link seam hands `refresh()` the unwrapped dish_get_status
    // message; driving the snapshot through a connected fake dish keeps
    // these tests on the public surface.
    let pool = support::pool();
    let (connector, state) = support::FakeConnector::new(&pool);
    state.lock().unwrap().status_reply = raw;
    let mut dish =
        dishy_core::Dish::with_connector(dishy_core::DishConfig::default(), Box::new(connector))
            .unwrap();
    dish.connect_without_refresh().unwrap();
    dish.refresh().unwrap()
}

// ── Connectivity and outage ─────────────────────────────────────────

#[test]
fn no_outage_field_means_connected() {
    let status = decode(support::healthy_status(&support::pool()));
    assert!(status.connected());
    assert_eq!(status.outage_reason().unwrap(), None);
}

#[test]
fn outage_cause_six_is_obstructed() {
    let status = decode(support::outage_status(&support::pool(), 6));
    assert!(!status.connected());
    assert_eq!(status.outage_reason().unwrap(), Some(OutageReason::Obstructed));
}

#[test]
fn every_known_cause_code_decodes() {
    for reason in OutageReason::ALL {
        let status = decode(support::outage_status(&support::pool(), reason.code()));
        assert_eq!(status.outage_reason().unwrap(), Some(reason));
    }
}

#[test]
fn unknown_cause_code_is_a_decode_error() {
    let status = decode(support::outage_status(&support::pool(), 99));
    assert!(!status.connected());
    assert!(matches!(
        status.outage_reason(),
        Err(DishError::Decode {
            field: "outage.cause",
            value: 99
        })
    ));
}

#[test]
fn outage_with_default_cause_is_unknown() {
    // An outage record whose cause was never set decodes as UNKNOWN=0,
    // which is a legitimate member, not a decode failure.
    let pool = support::pool();
    let outage = support::new_message(&pool, "DishOutage");
    let mut raw = support::healthy_status(&pool);
    raw.set_field_by_name("outage", Value::Message(outage));

    let status = decode(raw);
    assert_eq!(status.outage_reason().unwrap(), Some(OutageReason::Unknown));
}

// ── Obstruction ─────────────────────────────────────────────────────

#[test]
fn obstruction_flag_passes_through() {
    let pool = support::pool();
    let mut stats = support::new_message(&pool, "DishObstructionStats");
    stats.set_field_by_name("currently_obstructed", Value::Bool(true));
    stats.set_field_by_name("fraction_obstructed", Value::F32(0.031_25));
    let mut raw = support::healthy_status(&pool);
    raw.set_field_by_name("obstruction_stats", Value::Message(stats));

    let status = decode(raw);
    // Obstruction is independent of connectivity.
    assert!(status.connected());
    assert!(status.obstructed());
    assert_eq!(status.fraction_obstructed(), f64::from(0.031_25_f32));
}

#[test]
fn missing_obstruction_stats_reads_unobstructed() {
    let status = decode(support::healthy_status(&support::pool()));
    assert!(!status.obstructed());
    assert_eq!(status.fraction_obstructed(), 0.0);
}

// ── Numeric projections ─────────────────────────────────────────────

#[test]
fn scalar_fields_project_directly() {
    let status = decode(support::healthy_status(&support::pool()));
    assert_eq!(status.uptime_s(), 86_400);
    assert_eq!(status.pop_ping_drop_rate(), f64::from(0.01_f32));
    assert_eq!(status.pop_ping_latency_ms(), 25.0);
    assert_eq!(status.downlink_throughput_bps(), 93_000_000.0);
    assert_eq!(status.uplink_throughput_bps(), 21_000_000.0);
    assert_eq!(status.boresight_azimuth_deg(), 12.5);
    assert_eq!(status.boresight_elevation_deg(), f64::from(64.4_f32));
}

// ── Alerts ──────────────────────────────────────────────────────────

#[test]
fn active_alerts_come_back_in_declaration_order() {
    // The support schema numbers thermal_throttle *before* motors_stuck
    // on the wire; declaration order must win anyway.
    let status = decode(support::alerts_status(
        &support::pool(),
        &["thermal_throttle", "motors_stuck"],
    ));
    assert_eq!(
        status.alerts(),
        vec![DishAlert::MotorsStuck, DishAlert::ThermalThrottle]
    );
}

#[test]
fn all_alerts_in_order() {
    let status = decode(support::alerts_status(
        &support::pool(),
        &[
            "slow_ethernet_speeds",
            "unexpected_location",
            "mast_not_near_vertical",
            "thermal_shutdown",
            "thermal_throttle",
            "motors_stuck",
        ],
    ));
    assert_eq!(status.alerts(), DishAlert::ALL.to_vec());
}

#[test]
fn no_alerts_decodes_empty() {
    let status = decode(support::healthy_status(&support::pool()));
    assert!(status.alerts().is_empty());

    let quiet = decode(support::alerts_status(&support::pool(), &[]));
    assert!(quiet.alerts().is_empty());
}

// ── Diagnostics ─────────────────────────────────────────────────────

#[test]
fn debug_form_exposes_the_raw_reply() {
    let status = decode(support::healthy_status(&support::pool()));
    let rendered = format!("{status:?}");
    assert!(rendered.contains("DishStatus"));
    // Raw values are visible even where no typed accessor exists.
    assert!(rendered.contains("25"));
}
