//! `dishy watch` -- poll status until interrupted.

use std::time::Duration;

use owo_colors::OwoColorize;
use tracing::warn;

use dishy_core::{AsyncDish, DishError};

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    dish: &mut AsyncDish,
    args: &WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval.max(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match dish.refresh().await {
            Ok(status) => {
                let state = if status.connected() {
                    "online".green().to_string()
                } else {
                    let label = status
                        .outage_reason()?
                        .map_or_else(|| "offline".to_owned(), |reason| reason.label().to_owned());
                    format!("{}", label.red())
                };
                let alerts = status.alerts();
                let line = format!(
                    "{state}  obstructed={}  latency_ms={:.1}  down_bps={:.0}  up_bps={:.0}  alerts={}",
                    status.obstructed(),
                    status.pop_ping_latency_ms(),
                    status.downlink_throughput_bps(),
                    status.uplink_throughput_bps(),
                    alerts.len(),
                );
                output::print_output(&line, global.quiet);
            }
            Err(DishError::Communication { source }) => {
                // Transient LAN trouble is routine while watching; keep
                // polling and re-establish the channel next tick.
                warn!(%source, "refresh failed, reconnecting");
                if let Err(err) = dish.connect_without_refresh().await {
                    warn!(%err, "reconnect failed");
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}
