/*!
 * MLQ Scheduler
 * Multilevel queue CPU scheduler over a fixed, known-in-advance process set
 *
 * Levels are served in strict priority order at every dispatch decision:
 * - Q1: Round-Robin, quantum 1 by default
 * - Q2: Round-Robin, quantum 3 by default
 * - Q3: non-preemptive Shortest-Job-First
 *
 * Time is a logical counter owned by the scheduler. When no queued process
 * has arrived yet, the clock jumps to the next arrival.
 */

use crate::core::errors::SchedulerError;
use crate::core::types::Tick;
use crate::monitoring::SimulationSpan;
use crate::process::ProcessRecord;
use tracing::info;

mod metrics;
mod operations;
mod policy;
mod queues;
mod stats;

pub use metrics::{Averages, SimulationReport};
pub use policy::{Discipline, SchedulerConfig, TimeQuantum};
pub use queues::{QueueSet, Selection};
pub use stats::{ExecutionSlice, SchedulerStats};

/// Outcome of a single scheduler step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A process ran for one slice
    Dispatched(ExecutionSlice),
    /// No process was eligible; the clock moved from `from` to `to`
    Idle { from: Tick, to: Tick },
}

/// Scheduler context: clock, ready queues and finished set
///
/// Single-threaded by construction; all state is owned here and mutated
/// only through [`Scheduler::step`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
    clock: Tick,
    queues: QueueSet,
    finished: Vec<ProcessRecord>,
    timeline: Vec<ExecutionSlice>,
    stats: SchedulerStats,
    last_dispatched: Option<String>,
}

impl Scheduler {
    /// Create a scheduler with the default quanta
    pub fn new(processes: impl IntoIterator<Item = ProcessRecord>) -> Self {
        Self::with_config(processes, SchedulerConfig::default())
    }

    /// Create a scheduler with custom quanta
    pub fn with_config(
        processes: impl IntoIterator<Item = ProcessRecord>,
        config: SchedulerConfig,
    ) -> Self {
        let queues = QueueSet::from_records(processes);
        info!(
            processes = queues.len(),
            q1_quantum = config.q1_quantum.ticks(),
            q2_quantum = config.q2_quantum.ticks(),
            "Scheduler initialized"
        );

        Self {
            config,
            clock: 0,
            queues,
            finished: Vec::new(),
            timeline: Vec::new(),
            stats: SchedulerStats::default(),
            last_dispatched: None,
        }
    }

    /// Current simulated time
    #[inline]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Processes still waiting for CPU time
    #[inline]
    pub fn queues(&self) -> &QueueSet {
        &self.queues
    }

    /// Finished processes in completion order
    #[inline]
    pub fn finished(&self) -> &[ProcessRecord] {
        &self.finished
    }

    #[inline]
    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    pub fn is_done(&self) -> bool {
        self.queues.is_empty()
    }

    /// Consume the scheduler into its label-sorted report
    pub fn into_report(self) -> SimulationReport {
        SimulationReport::new(self.finished, self.stats, self.timeline)
    }
}

/// Run a complete simulation and produce its report
///
/// Fails only if the clock would leave the `Tick` range, which records
/// produced by the loader cannot cause.
pub fn simulate(
    processes: impl IntoIterator<Item = ProcessRecord>,
    config: SchedulerConfig,
) -> Result<SimulationReport, SchedulerError> {
    let mut scheduler = Scheduler::with_config(processes, config);
    let span = SimulationSpan::new(scheduler.queues().len());
    {
        let _entered = span.enter();
        scheduler.run()?;
    }
    span.record_stats(scheduler.stats());
    Ok(scheduler.into_report())
}
