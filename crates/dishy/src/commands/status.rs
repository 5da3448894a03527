//! `dishy status` -- one status snapshot, fully decoded.

use serde::Serialize;

use dishy_core::{AsyncDish, DishStatus};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Flattened, serializable view of one snapshot.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub connected: bool,
    pub outage_reason: Option<String>,
    pub obstructed: bool,
    pub fraction_obstructed: f64,
    pub uptime_s: u64,
    pub pop_ping_drop_rate: f64,
    pub pop_ping_latency_ms: f64,
    /// Unit unconfirmed upstream (bits vs bytes per second).
    pub downlink_throughput_bps: f64,
    /// Unit unconfirmed upstream (bits vs bytes per second).
    pub uplink_throughput_bps: f64,
    pub boresight_azimuth_deg: f64,
    pub boresight_elevation_deg: f64,
    pub alerts: Vec<String>,
}

impl StatusReport {
    pub fn from_status(status: &DishStatus) -> Result<Self, CliError> {
        Ok(Self {
            connected: status.connected(),
            outage_reason: status
                .outage_reason()?
                .map(|reason| reason.label().to_owned()),
            obstructed: status.obstructed(),
            fraction_obstructed: status.fraction_obstructed(),
            uptime_s: status.uptime_s(),
            pop_ping_drop_rate: status.pop_ping_drop_rate(),
            pop_ping_latency_ms: status.pop_ping_latency_ms(),
            downlink_throughput_bps: status.downlink_throughput_bps(),
            uplink_throughput_bps: status.uplink_throughput_bps(),
            boresight_azimuth_deg: status.boresight_azimuth_deg(),
            boresight_elevation_deg: status.boresight_elevation_deg(),
            alerts: status
                .alerts()
                .into_iter()
                .map(|alert| alert.label().to_owned())
                .collect(),
        })
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("connected", self.connected.to_string()),
            (
                "outage reason",
                self.outage_reason.clone().unwrap_or_else(|| "-".into()),
            ),
            ("obstructed", self.obstructed.to_string()),
            (
                "fraction obstructed",
                format!("{:.4}", self.fraction_obstructed),
            ),
            ("uptime (s)", self.uptime_s.to_string()),
            ("ping drop rate", format!("{:.4}", self.pop_ping_drop_rate)),
            ("ping latency (ms)", format!("{:.1}", self.pop_ping_latency_ms)),
            (
                "downlink throughput",
                format!("{:.0}", self.downlink_throughput_bps),
            ),
            (
                "uplink throughput",
                format!("{:.0}", self.uplink_throughput_bps),
            ),
            ("azimuth (deg)", format!("{:.1}", self.boresight_azimuth_deg)),
            (
                "elevation (deg)",
                format!("{:.1}", self.boresight_elevation_deg),
            ),
            ("alerts", self.alerts.join(", ")),
        ]
    }

    fn plain(&self) -> String {
        let lines = [
            ("connected", self.connected.to_string()),
            (
                "outage_reason",
                self.outage_reason.clone().unwrap_or_else(|| "-".into()),
            ),
            ("obstructed", self.obstructed.to_string()),
            ("fraction_obstructed", self.fraction_obstructed.to_string()),
            ("uptime_s", self.uptime_s.to_string()),
            ("pop_ping_drop_rate", self.pop_ping_drop_rate.to_string()),
            ("pop_ping_latency_ms", self.pop_ping_latency_ms.to_string()),
            (
                "downlink_throughput_bps",
                self.downlink_throughput_bps.to_string(),
            ),
            (
                "uplink_throughput_bps",
                self.uplink_throughput_bps.to_string(),
            ),
            (
                "boresight_azimuth_deg",
                self.boresight_azimuth_deg.to_string(),
            ),
            (
                "boresight_elevation_deg",
                self.boresight_elevation_deg.to_string(),
            ),
            ("alerts", self.alerts.join(",")),
        ];
        lines
            .into_iter()
            .map(|(field, value)| format!("{field}\t{value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn handle(dish: &mut AsyncDish, global: &GlobalOpts) -> Result<(), CliError> {
    let status = dish.refresh().await?;
    let report = StatusReport::from_status(&status)?;

    let out = output::render(&global.output, &report, &report.rows(), &report.plain());
    output::print_output(&out, global.quiet);
    Ok(())
}
