/*!
 * Process Loader
 * Parses the semicolon-delimited process description file
 *
 * Format, one process per line: `label;BT;AT;Q;Pr`
 * - blank lines and lines starting with `#` are skipped
 * - fields are trimmed; one trailing `;` is tolerated
 * - Q is 1-indexed (1..=3)
 * - BT, AT and the sum of all BT are at most `MAX_TIME`
 */

use crate::core::errors::{MlqError, ParseError};
use crate::core::limits::{COMMENT_PREFIX, FIELD_SEPARATOR, INPUT_FIELDS, MAX_TIME};
use crate::core::types::{MlqResult, Priority, Tick};
use crate::process::{ProcessRecord, QueueLevel};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Read and parse a process description file
pub fn load_processes(path: impl AsRef<Path>) -> MlqResult<Vec<ProcessRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| MlqError::io(path, e))?;
    let processes = parse_processes(&contents)?;
    info!(path = %path.display(), processes = processes.len(), "Loaded process file");
    Ok(processes)
}

/// Parse process records from text, in input order
pub fn parse_processes(input: &str) -> Result<Vec<ProcessRecord>, ParseError> {
    let mut processes = Vec::new();
    let mut seen = HashSet::new();
    let mut total_burst: Tick = 0;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let record = parse_line(idx + 1, line)?;
        if !seen.insert(record.label.clone()) {
            return Err(ParseError::DuplicateLabel {
                line: idx + 1,
                label: record.label,
            });
        }
        // Both terms are at most MAX_TIME, so the sum cannot wrap
        total_burst += record.burst_time;
        if total_burst > MAX_TIME {
            return Err(ParseError::WorkloadTooLong {
                line: idx + 1,
                total: total_burst,
                max: MAX_TIME,
            });
        }
        debug!(line = idx + 1, label = %record.label, "Parsed process");
        processes.push(record);
    }

    Ok(processes)
}

fn parse_line(line: usize, text: &str) -> Result<ProcessRecord, ParseError> {
    let text = text.strip_suffix(FIELD_SEPARATOR).unwrap_or(text);
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [label, burst, arrival, level, priority] = fields[..] else {
        return Err(ParseError::FieldCount {
            line,
            found: fields.len(),
        });
    };
    debug_assert_eq!(fields.len(), INPUT_FIELDS);

    if label.is_empty() {
        return Err(ParseError::EmptyLabel { line });
    }

    let burst_time = parse_time(line, "burst time", burst)?;
    let arrival_time = parse_time(line, "arrival time", arrival)?;
    let priority: Priority = parse_field(line, "priority", "an integer", priority)?;

    let queue_level = level
        .parse::<u8>()
        .ok()
        .and_then(QueueLevel::from_number)
        .ok_or_else(|| ParseError::InvalidQueueLevel {
            line,
            value: level.to_string(),
        })?;

    if burst_time == 0 {
        return Err(ParseError::ZeroBurst {
            line,
            label: label.to_string(),
        });
    }

    Ok(ProcessRecord::new(
        label,
        burst_time,
        arrival_time,
        queue_level,
        priority,
    ))
}

fn parse_time(line: usize, field: &str, value: &str) -> Result<Tick, ParseError> {
    let ticks: Tick = parse_field(line, field, "a non-negative integer", value)?;
    if ticks > MAX_TIME {
        return Err(ParseError::TimeOutOfRange {
            line,
            field: field.to_string(),
            value: ticks,
            max: MAX_TIME,
        });
    }
    Ok(ticks)
}

fn parse_field<T: FromStr>(
    line: usize,
    field: &str,
    expected: &str,
    value: &str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        field: field.to_string(),
        expected: expected.to_string(),
        value: value.to_string(),
    })
}
