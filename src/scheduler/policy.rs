/*!
 * Scheduler Policy
 * Dispatch disciplines per queue level and their configuration
 */

use crate::core::errors::SchedulerError;
use crate::core::limits::{DEFAULT_Q1_QUANTUM, DEFAULT_Q2_QUANTUM, MAX_TIME};
use crate::core::types::Tick;
use crate::process::{ProcessRecord, QueueLevel};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

/// Round-Robin time quantum in `1..=MAX_TIME`
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create a validated quantum
    #[inline]
    pub const fn new(ticks: Tick) -> Result<Self, SchedulerError> {
        if ticks == 0 || ticks > MAX_TIME {
            return Err(SchedulerError::InvalidQuantum {
                ticks,
                max: MAX_TIME,
            });
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// How a queue picks and runs its next process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "snake_case")]
pub enum Discipline {
    /// First eligible process in queue order runs for at most one quantum
    RoundRobin { quantum: TimeQuantum },
    /// Eligible process with the least remaining work runs to completion
    ShortestJobFirst,
}

impl Discipline {
    /// Position of the process this discipline would dispatch at `now`
    pub fn select(&self, queue: &VecDeque<ProcessRecord>, now: Tick) -> Option<usize> {
        match self {
            Self::RoundRobin { .. } => queue.iter().position(|p| p.is_eligible(now)),
            Self::ShortestJobFirst => {
                let mut best: Option<(usize, Tick)> = None;
                for (pos, process) in queue.iter().enumerate() {
                    if !process.is_eligible(now) {
                        continue;
                    }
                    // Strict comparison keeps the earliest member on ties
                    match best {
                        Some((_, remaining)) if process.remaining_time() >= remaining => {}
                        _ => best = Some((pos, process.remaining_time())),
                    }
                }
                best.map(|(pos, _)| pos)
            }
        }
    }

    /// Length of the slice granted to a process with `remaining` work left
    #[inline]
    pub fn slice_for(&self, remaining: Tick) -> Tick {
        match self {
            Self::RoundRobin { quantum } => quantum.ticks().min(remaining),
            Self::ShortestJobFirst => remaining,
        }
    }

    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

/// Quanta of the two Round-Robin levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub q1_quantum: TimeQuantum,
    pub q2_quantum: TimeQuantum,
}

impl SchedulerConfig {
    /// Discipline applied to `level`
    #[inline]
    pub fn discipline(&self, level: QueueLevel) -> Discipline {
        match level {
            QueueLevel::Q1 => Discipline::RoundRobin {
                quantum: self.q1_quantum,
            },
            QueueLevel::Q2 => Discipline::RoundRobin {
                quantum: self.q2_quantum,
            },
            QueueLevel::Q3 => Discipline::ShortestJobFirst,
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            q1_quantum: TimeQuantum(DEFAULT_Q1_QUANTUM),
            q2_quantum: TimeQuantum(DEFAULT_Q2_QUANTUM),
        }
    }
}
