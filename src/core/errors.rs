/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Tick;
use miette::Diagnostic;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Input parsing errors
///
/// Every variant carries the 1-based line number of the offending record.
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ParseError {
    #[error("line {line}: expected 5 fields (label;BT;AT;Q;Pr), found {found}")]
    #[diagnostic(
        code(parse::field_count),
        help("Each record must look like `A;5;0;1;1`. Lines starting with `#` are comments.")
    )]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: empty label")]
    #[diagnostic(code(parse::empty_label))]
    EmptyLabel { line: usize },

    #[error("line {line}: {field} must be {expected}, got `{value}`")]
    #[diagnostic(code(parse::invalid_integer))]
    InvalidInteger {
        line: usize,
        field: String,
        expected: String,
        value: String,
    },

    #[error("line {line}: process `{label}` has a burst time of 0")]
    #[diagnostic(
        code(parse::zero_burst),
        help("Burst time must be at least 1 time unit.")
    )]
    ZeroBurst { line: usize, label: String },

    #[error("line {line}: queue level {value} is out of range")]
    #[diagnostic(
        code(parse::invalid_queue_level),
        help("Queue levels are 1-indexed: 1 (RR), 2 (RR) or 3 (SJF).")
    )]
    InvalidQueueLevel { line: usize, value: String },

    #[error("line {line}: duplicate label `{label}`")]
    #[diagnostic(
        code(parse::duplicate_label),
        help("Labels identify processes in the report and must be unique.")
    )]
    DuplicateLabel { line: usize, label: String },

    #[error("line {line}: {field} {value} exceeds the maximum of {max}")]
    #[diagnostic(
        code(parse::time_out_of_range),
        help("Burst and arrival times are limited so the simulated clock cannot overflow.")
    )]
    TimeOutOfRange {
        line: usize,
        field: String,
        value: Tick,
        max: Tick,
    },

    #[error("line {line}: total burst time {total} exceeds the maximum of {max}")]
    #[diagnostic(
        code(parse::workload_too_long),
        help("The sum of all burst times must stay within the simulated time range.")
    )]
    WorkloadTooLong { line: usize, total: Tick, max: Tick },
}

impl ParseError {
    /// Line the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::FieldCount { line, .. }
            | Self::EmptyLabel { line }
            | Self::InvalidInteger { line, .. }
            | Self::ZeroBurst { line, .. }
            | Self::InvalidQueueLevel { line, .. }
            | Self::DuplicateLabel { line, .. }
            | Self::TimeOutOfRange { line, .. }
            | Self::WorkloadTooLong { line, .. } => *line,
        }
    }
}

/// Scheduler errors
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("quantum {ticks} must be between 1 and {max} time units")]
    #[diagnostic(code(scheduler::invalid_quantum))]
    InvalidQuantum { ticks: Tick, max: Tick },

    #[error("clock overflow dispatching `{label}`: {clock} + {run} exceeds the time range")]
    #[diagnostic(
        code(scheduler::clock_overflow),
        help("Arrival and burst times of records built outside the loader must stay within MAX_TIME.")
    )]
    ClockOverflow { label: String, clock: Tick, run: Tick },
}

/// Configuration errors
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("invalid quantum for {name}: {value}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("A Round-Robin quantum must be a positive integer number of time units.")
    )]
    InvalidQuantum { name: String, value: String },

    #[error("{name}: {source}")]
    #[diagnostic(code(config::quantum_out_of_range))]
    QuantumOutOfRange {
        name: String,
        #[source]
        source: SchedulerError,
    },

    #[error("invalid output format `{0}`")]
    #[diagnostic(code(config::invalid_format), help("Valid formats: text, json."))]
    InvalidFormat(String),
}

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum MlqError {
    #[error("Parse error: {0}")]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error on {}: {source}", .path.display())]
    #[diagnostic(
        code(mlq::io_error),
        help("Check that the file exists and that its directory is writable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(mlq::serialization_error))]
    Serialization(#[from] serde_json::Error),
}

impl MlqError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
