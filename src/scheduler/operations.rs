/*!
 * Scheduler Core Operations
 * Dispatch selection, Round-Robin / SJF execution and idle-time advance
 */

use super::queues::Selection;
use super::stats::ExecutionSlice;
use super::{Scheduler, Step};
use crate::core::errors::SchedulerError;
use tracing::{debug, trace, warn};

impl Scheduler {
    /// Advance the simulation by one dispatch or one idle jump
    ///
    /// Returns `Ok(None)` once every queue is empty.
    pub fn step(&mut self) -> Result<Option<Step>, SchedulerError> {
        if self.queues.is_empty() {
            return Ok(None);
        }

        if let Some(selection) = self.queues.select(self.clock, &self.config) {
            return Ok(self.dispatch(selection)?.map(Step::Dispatched));
        }

        // Nothing eligible: every queued process arrives in the future
        let Some(next_arrival) = self.queues.next_arrival() else {
            return Ok(None);
        };
        let from = self.clock;
        if next_arrival > from {
            self.clock = next_arrival;
            self.stats.record_idle(from, next_arrival);
        }
        trace!(from, to = self.clock, "CPU idle until next arrival");
        Ok(Some(Step::Idle {
            from,
            to: self.clock,
        }))
    }

    /// Run until every process has finished
    pub fn run(&mut self) -> Result<(), SchedulerError> {
        while self.step()?.is_some() {}
        Ok(())
    }

    /// Execute the selected process under its level's discipline
    ///
    /// The slice end is checked before the process leaves its queue, so an
    /// overflow leaves the scheduler state untouched.
    fn dispatch(&mut self, selection: Selection) -> Result<Option<ExecutionSlice>, SchedulerError> {
        let discipline = self.config.discipline(selection.level);
        let Some(candidate) = self.queues.level(selection.level).get(selection.position) else {
            return Ok(None);
        };
        let run = discipline.slice_for(candidate.remaining_time());
        let Some(end) = self.clock.checked_add(run) else {
            warn!(process = %candidate.label, clock = self.clock, run, "Clock overflow");
            return Err(SchedulerError::ClockOverflow {
                label: candidate.label.clone(),
                clock: self.clock,
                run,
            });
        };

        let Some(mut process) = self.queues.take(selection) else {
            return Ok(None);
        };
        process.mark_dispatched(self.clock);
        let start = self.clock;
        self.clock = end;
        let finished = process.execute(run, end);

        let slice = ExecutionSlice {
            label: process.label.clone(),
            level: selection.level,
            start,
            end: self.clock,
        };
        let switched = self
            .last_dispatched
            .as_ref()
            .is_some_and(|last| *last != process.label);
        self.stats.record_slice(&slice, switched, !finished);
        self.last_dispatched = Some(process.label.clone());

        debug!(
            process = %process.label,
            level = %selection.level,
            start,
            end = self.clock,
            remaining = process.remaining_time(),
            "dispatched"
        );

        if finished {
            debug!(
                process = %process.label,
                completion_time = self.clock,
                "process finished"
            );
            self.finished.push(process);
        } else {
            self.queues.requeue(process);
        }

        self.timeline.push(slice.clone());
        Ok(Some(slice))
    }
}
