/*!
 * Runtime Configuration
 * Resolves input/output paths, report format and quanta from CLI arguments
 * and environment variables
 */

use super::errors::ConfigError;
use super::limits::{DEFAULT_INPUT_PATH, OUTPUT_SUFFIX};
use crate::scheduler::{SchedulerConfig, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the input file (overridden by the first argument)
pub const ENV_INPUT: &str = "MLQ_INPUT";
/// Environment variable naming the output file (overridden by the second argument)
pub const ENV_OUTPUT: &str = "MLQ_OUTPUT";
/// Environment variable selecting the report format
pub const ENV_FORMAT: &str = "MLQ_FORMAT";
/// Environment variable overriding the first queue's quantum
pub const ENV_Q1_QUANTUM: &str = "MLQ_QUANTUM_Q1";
/// Environment variable overriding the second queue's quantum
pub const ENV_Q2_QUANTUM: &str = "MLQ_QUANTUM_Q2";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Semicolon-delimited result file
    #[default]
    Text,
    /// Pretty-printed JSON report, including run statistics and timeline
    Json,
}

impl OutputFormat {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// File extension used when the output path is derived from the input
    #[inline]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Fully resolved configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub scheduler: SchedulerConfig,
}

impl Config {
    /// Resolve configuration from positional arguments and the process environment
    ///
    /// Environment variables:
    /// - MLQ_INPUT / MLQ_OUTPUT: file paths (positional arguments take precedence)
    /// - MLQ_FORMAT: `text` (default) or `json`
    /// - MLQ_QUANTUM_Q1 / MLQ_QUANTUM_Q2: Round-Robin quanta (default 1 and 3)
    pub fn from_env<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary variable lookup
    pub fn resolve<I, F>(args: I, lookup: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let input_arg = args.next();
        let output_arg = args.next();

        let format = match lookup(ENV_FORMAT) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let input = input_arg
            .or_else(|| lookup(ENV_INPUT))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

        let output = output_arg
            .or_else(|| lookup(ENV_OUTPUT))
            .map(PathBuf::from)
            .unwrap_or_else(|| derive_output_path(&input, format));

        let mut scheduler = SchedulerConfig::default();
        if let Some(value) = lookup(ENV_Q1_QUANTUM) {
            scheduler.q1_quantum = parse_quantum(ENV_Q1_QUANTUM, &value)?;
        }
        if let Some(value) = lookup(ENV_Q2_QUANTUM) {
            scheduler.q2_quantum = parse_quantum(ENV_Q2_QUANTUM, &value)?;
        }

        Ok(Self {
            input,
            output,
            format,
            scheduler,
        })
    }
}

fn parse_quantum(name: &str, value: &str) -> Result<TimeQuantum, ConfigError> {
    let ticks = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidQuantum {
            name: name.to_string(),
            value: value.to_string(),
        })?;
    TimeQuantum::new(ticks).map_err(|source| ConfigError::QuantumOutOfRange {
        name: name.to_string(),
        source,
    })
}

/// `dir/name.txt` -> `dir/name_output.<ext>`
fn derive_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mlq".to_string());
    input.with_file_name(format!("{}{}.{}", stem, OUTPUT_SUFFIX, format.extension()))
}
