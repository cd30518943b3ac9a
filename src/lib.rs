/*!
 * MLQ Scheduler Library
 * Multilevel queue CPU scheduling simulator exposed as a library
 */

pub mod core;
pub mod io;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    Config, ConfigError, MlqError, MlqResult, OutputFormat, ParseError, SchedulerError, Tick,
};
pub use io::{load_processes, parse_processes, render_json, render_text, write_report};
pub use monitoring::init_tracing;
pub use process::{ProcessRecord, QueueLevel};
pub use scheduler::{
    simulate, Averages, ExecutionSlice, Scheduler, SchedulerConfig, SchedulerStats,
    SimulationReport, Step, TimeQuantum,
};
