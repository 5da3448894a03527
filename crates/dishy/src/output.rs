//! Output formatting: table, JSON, plain.
//!
//! Table uses `tabled` field/value rows, structured formats serialize
//! the report via serde, plain emits scripting-friendly lines.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;

#[derive(Tabled)]
struct KvRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render a report in the chosen format.
///
/// - `table`: two-column field/value table from `rows`
/// - `json` / `json-compact`: serializes `data` via serde
/// - `plain`: the pre-formatted `plain` string
pub fn render<T: serde::Serialize>(
    format: &OutputFormat,
    data: &T,
    rows: &[(&str, String)],
    plain: &str,
) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<KvRow> = rows
                .iter()
                .map(|(field, value)| KvRow {
                    field: (*field).to_owned(),
                    value: value.clone(),
                })
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).expect("serialization should not fail")
        }
        OutputFormat::Plain => plain.to_owned(),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
