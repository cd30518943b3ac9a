/*!
 * Metrics Aggregation
 * Per-run averages and the final, label-sorted simulation report
 */

use super::stats::{ExecutionSlice, SchedulerStats};
use crate::core::types::Tick;
use crate::process::ProcessRecord;
use serde::Serialize;

/// Arithmetic means over all finished processes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Averages {
    pub waiting_time: f64,
    pub completion_time: f64,
    pub response_time: f64,
    pub turnaround_time: f64,
}

impl Averages {
    /// All four means are 0 for an empty set
    pub fn from_records(records: &[ProcessRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let count = records.len() as f64;
        // Summed wide: many large metrics can exceed the Tick range together
        let mean = |metric: fn(&ProcessRecord) -> Option<Tick>| {
            records
                .iter()
                .filter_map(metric)
                .map(u128::from)
                .sum::<u128>() as f64
                / count
        };

        Self {
            waiting_time: mean(ProcessRecord::waiting_time),
            completion_time: mean(ProcessRecord::completion_time),
            response_time: mean(ProcessRecord::response_time),
            turnaround_time: mean(ProcessRecord::turnaround_time),
        }
    }
}

/// Outcome of a complete simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Finished processes, sorted by label
    pub processes: Vec<ProcessRecord>,
    pub averages: Averages,
    pub stats: SchedulerStats,
    pub timeline: Vec<ExecutionSlice>,
}

impl SimulationReport {
    pub(super) fn new(
        mut finished: Vec<ProcessRecord>,
        stats: SchedulerStats,
        timeline: Vec<ExecutionSlice>,
    ) -> Self {
        // Stable, so equal labels keep completion order
        finished.sort_by(|a, b| a.label.cmp(&b.label));
        let averages = Averages::from_records(&finished);
        Self {
            processes: finished,
            averages,
            stats,
            timeline,
        }
    }

    /// Look up a finished process by label
    pub fn process(&self, label: &str) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.label == label)
    }

    /// Slices of one process in dispatch order
    pub fn slices_of<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ExecutionSlice> + 'a {
        self.timeline.iter().filter(move |s| s.label == label)
    }
}
