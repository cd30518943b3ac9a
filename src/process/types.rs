/*!
 * Process Types
 * Process records and queue levels consumed by the scheduler
 */

use crate::core::limits::QUEUE_LEVELS;
use crate::core::types::{Priority, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ready queue a process is assigned to
///
/// Levels are ordered by dispatch priority: `Q1` always wins over `Q2`,
/// which always wins over `Q3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueLevel {
    /// Round-Robin, short quantum
    Q1,
    /// Round-Robin, long quantum
    Q2,
    /// Shortest-Job-First, non-preemptive
    Q3,
}

impl QueueLevel {
    /// All levels in dispatch order
    pub const ALL: [QueueLevel; QUEUE_LEVELS] = [Self::Q1, Self::Q2, Self::Q3];

    /// 0-based index used internally
    #[inline(always)]
    pub const fn index(&self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
        }
    }

    /// 1-based number used by the input and report files
    #[inline(always)]
    pub const fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Parse the 1-based level used in input files
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Q1),
            2 => Some(Self::Q2),
            3 => Some(Self::Q3),
            _ => None,
        }
    }
}

impl fmt::Display for QueueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Metrics fixed at the instant a process finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub completion_time: Tick,
    pub turnaround_time: Tick,
    pub waiting_time: Tick,
}

/// Static description and scheduling state of one process
///
/// The static fields are fixed at load time. `remaining_time`,
/// `response_time` and `completion` are only mutated by the scheduler, and
/// never again once `remaining_time` reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub label: String,
    pub burst_time: Tick,
    pub arrival_time: Tick,
    pub queue_level: QueueLevel,
    pub priority: Priority,
    remaining_time: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_time: Option<Tick>,
    #[serde(flatten)]
    completion: Option<Completion>,
}

impl ProcessRecord {
    /// Create a fresh record with all of its work remaining
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        burst_time: Tick,
        arrival_time: Tick,
        queue_level: QueueLevel,
        priority: Priority,
    ) -> Self {
        Self {
            label: label.into(),
            burst_time,
            arrival_time,
            queue_level,
            priority,
            remaining_time: burst_time,
            response_time: None,
            completion: None,
        }
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline]
    pub fn response_time(&self) -> Option<Tick> {
        self.response_time
    }

    #[inline]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.completion_time)
    }

    #[inline]
    pub fn turnaround_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.turnaround_time)
    }

    #[inline]
    pub fn waiting_time(&self) -> Option<Tick> {
        self.completion.map(|c| c.waiting_time)
    }

    /// True once the process has been dispatched at least once
    #[inline]
    pub fn is_started(&self) -> bool {
        self.response_time.is_some()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Arrived by `now` and still holding work
    #[inline(always)]
    pub fn is_eligible(&self, now: Tick) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }

    /// Record the first dispatch; later dispatches leave the response time alone
    pub(crate) fn mark_dispatched(&mut self, now: Tick) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Consume `run` units of work ending at `now`; returns true if the process finished
    pub(crate) fn execute(&mut self, run: Tick, now: Tick) -> bool {
        debug_assert!(run <= self.remaining_time);
        self.remaining_time -= run;
        if self.remaining_time == 0 {
            let turnaround_time = now - self.arrival_time;
            self.completion = Some(Completion {
                completion_time: now,
                turnaround_time,
                waiting_time: turnaround_time - self.burst_time,
            });
            true
        } else {
            false
        }
    }
}
