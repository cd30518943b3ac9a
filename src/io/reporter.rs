/*!
 * Report Writer
 * Renders a simulation report as the semicolon-delimited result file or JSON
 */

use crate::core::config::OutputFormat;
use crate::core::errors::MlqError;
use crate::core::limits::REPORT_COLUMNS;
use crate::core::types::MlqResult;
use crate::process::ProcessRecord;
use crate::scheduler::SimulationReport;
use std::path::Path;
use tracing::info;

/// Render the text result file
///
/// `name` identifies the file in the header line, usually its path.
pub fn render_text(name: &str, report: &SimulationReport) -> String {
    let mut lines = vec![format!("# archivo: {}", name), REPORT_COLUMNS.to_string()];
    lines.extend(report.processes.iter().map(render_process));
    lines.push(String::new());
    lines.push(render_averages(report));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `WT=..; CT=..; RT=..; TAT=..;`, with bare zeros for an empty run
fn render_averages(report: &SimulationReport) -> String {
    if report.processes.is_empty() {
        return "WT=0; CT=0; RT=0; TAT=0;".to_string();
    }
    let avg = &report.averages;
    format!(
        "WT={}; CT={}; RT={}; TAT={};",
        format_average(avg.waiting_time),
        format_average(avg.completion_time),
        format_average(avg.response_time),
        format_average(avg.turnaround_time),
    )
}

/// `label;BT;AT;Q;Pr;WT;CT;RT;TAT`
fn render_process(process: &ProcessRecord) -> String {
    let metric = |value: Option<u64>| value.map(|v| v.to_string()).unwrap_or_default();
    format!(
        "{};{};{};{};{};{};{};{};{}",
        process.label,
        process.burst_time,
        process.arrival_time,
        process.queue_level.number(),
        process.priority,
        metric(process.waiting_time()),
        metric(process.completion_time()),
        metric(process.response_time()),
        metric(process.turnaround_time()),
    )
}

/// Shortest round-trip rendering of a mean
///
/// Decimal exponents in `-4..16` print positionally and keep a fractional
/// digit (`6.0`, `2.5`, `0.0001`). Others print as `<mantissa>e<sign><2+ digits>`
/// (`5e-05`, `1.5e+17`).
pub fn format_average(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs());
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &SimulationReport) -> MlqResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report in `format` and write it to `path`
pub fn write_report(
    path: impl AsRef<Path>,
    format: OutputFormat,
    report: &SimulationReport,
) -> MlqResult<()> {
    let path = path.as_ref();
    let contents = match format {
        OutputFormat::Text => render_text(&path.display().to_string(), report),
        OutputFormat::Json => render_json(report)?,
    };
    std::fs::write(path, contents).map_err(|e| MlqError::io(path, e))?;
    info!(
        path = %path.display(),
        format = format.as_str(),
        processes = report.processes.len(),
        "Report written"
    );
    Ok(())
}
