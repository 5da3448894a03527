//! `dishy alerts` -- active alerts from a fresh snapshot.

use serde::Serialize;

use dishy_core::AsyncDish;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct AlertReport {
    alerts: Vec<AlertEntry>,
}

#[derive(Debug, Serialize)]
struct AlertEntry {
    code: String,
    label: String,
}

pub async fn handle(dish: &mut AsyncDish, global: &GlobalOpts) -> Result<(), CliError> {
    let status = dish.refresh().await?;
    let alerts = status.alerts();

    if alerts.is_empty() {
        output::print_output("no active alerts", global.quiet);
        return Ok(());
    }

    let report = AlertReport {
        alerts: alerts
            .iter()
            .map(|alert| AlertEntry {
                code: alert.field_name().to_owned(),
                label: alert.label().to_owned(),
            })
            .collect(),
    };
    let rows: Vec<(&str, String)> = report
        .alerts
        .iter()
        .map(|entry| (entry.code.as_str(), entry.label.clone()))
        .collect();
    let plain = report
        .alerts
        .iter()
        .map(|entry| entry.code.clone())
        .collect::<Vec<_>>()
        .join("\n");

    let out = output::render(&global.output, &report, &rows, &plain);
    output::print_output(&out, global.quiet);
    Ok(())
}
