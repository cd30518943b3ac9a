/*!
 * Multilevel Ready Queues
 * One ordered queue per level, populated at load time
 */

use super::policy::SchedulerConfig;
use crate::core::limits::QUEUE_LEVELS;
use crate::core::types::Tick;
use crate::process::{ProcessRecord, QueueLevel};
use std::collections::VecDeque;

/// Where the next dispatch comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub level: QueueLevel,
    pub position: usize,
}

/// The three ready queues of the scheduler
#[derive(Debug, Clone, Default)]
pub struct QueueSet {
    levels: [VecDeque<ProcessRecord>; QUEUE_LEVELS],
}

impl QueueSet {
    /// Partition records by level, each queue stably sorted by arrival time
    pub fn from_records(records: impl IntoIterator<Item = ProcessRecord>) -> Self {
        let mut buckets: [Vec<ProcessRecord>; QUEUE_LEVELS] = Default::default();
        for record in records {
            buckets[record.queue_level.index()].push(record);
        }

        let mut set = Self::default();
        for (queue, mut bucket) in set.levels.iter_mut().zip(buckets) {
            bucket.sort_by_key(|p| p.arrival_time);
            queue.extend(bucket);
        }
        set
    }

    #[inline]
    pub fn level(&self, level: QueueLevel) -> &VecDeque<ProcessRecord> {
        &self.levels[level.index()]
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(VecDeque::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.levels.iter().flatten()
    }

    /// Strict priority across levels: the first level with an eligible process wins
    pub fn select(&self, now: Tick, config: &SchedulerConfig) -> Option<Selection> {
        QueueLevel::ALL.into_iter().find_map(|level| {
            config
                .discipline(level)
                .select(self.level(level), now)
                .map(|position| Selection { level, position })
        })
    }

    /// Earliest arrival among queued (unfinished) processes
    pub fn next_arrival(&self) -> Option<Tick> {
        self.iter()
            .filter(|p| !p.is_finished())
            .map(|p| p.arrival_time)
            .min()
    }

    /// Detach the selected process from its queue
    pub(crate) fn take(&mut self, selection: Selection) -> Option<ProcessRecord> {
        self.levels[selection.level.index()].remove(selection.position)
    }

    /// Re-enter a partially executed process at the tail of its own queue
    pub(crate) fn requeue(&mut self, record: ProcessRecord) {
        self.levels[record.queue_level.index()].push_back(record);
    }
}
