/*!
 * Scheduler Statistics
 * Track dispatches, idle time and the execution timeline of a run
 */

use crate::core::limits::QUEUE_LEVELS;
use crate::core::types::Tick;
use crate::process::QueueLevel;
use serde::Serialize;

/// One contiguous stretch of CPU time given to a process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionSlice {
    pub label: String,
    pub level: QueueLevel,
    pub start: Tick,
    pub end: Tick,
}

impl ExecutionSlice {
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Aggregate counters for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerStats {
    /// Slices executed
    pub dispatches: u64,
    /// Round-Robin slices that ended with work remaining
    pub preemptions: u64,
    /// Dispatches of a different process than the previous dispatch
    pub context_switches: u64,
    /// Time the CPU spent waiting for the next arrival
    pub idle_time: Tick,
    /// Time spent executing processes
    pub busy_time: Tick,
    /// Simulated time at which the last process finished
    pub makespan: Tick,
    /// Dispatch count per queue level
    pub dispatches_per_level: [u64; QUEUE_LEVELS],
}

impl SchedulerStats {
    pub(super) fn record_slice(&mut self, slice: &ExecutionSlice, switched: bool, preempted: bool) {
        self.dispatches += 1;
        self.dispatches_per_level[slice.level.index()] += 1;
        self.busy_time += slice.len();
        self.makespan = self.makespan.max(slice.end);
        if switched {
            self.context_switches += 1;
        }
        if preempted {
            self.preemptions += 1;
        }
    }

    pub(super) fn record_idle(&mut self, from: Tick, to: Tick) {
        self.idle_time += to - from;
    }

    /// Fraction of the makespan spent executing processes
    pub fn cpu_utilization(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            self.busy_time as f64 / self.makespan as f64
        }
    }
}
