/*!
 * Scheduling Invariant Tests
 * Property-based checks over randomly generated workloads
 */

use mlq_scheduler::{
    render_text, simulate, ProcessRecord, QueueLevel, SchedulerConfig, SimulationReport,
};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<ProcessRecord>> {
    prop::collection::vec((1u64..10, 0u64..30, 0usize..3, -5i64..5), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (bt, at, level, pr))| {
                ProcessRecord::new(format!("P{:02}", i), bt, at, QueueLevel::ALL[level], pr)
            })
            .collect()
    })
}

fn run(processes: &[ProcessRecord]) -> SimulationReport {
    simulate(processes.to_vec(), SchedulerConfig::default()).unwrap()
}

/// Unfinished and arrived at `t`, per the final report
fn waiting_at(report: &SimulationReport, t: u64) -> impl Iterator<Item = &ProcessRecord> {
    report
        .processes
        .iter()
        .filter(move |p| p.arrival_time <= t && p.completion_time().unwrap() > t)
}

proptest! {
    #[test]
    fn every_process_finishes_with_consistent_metrics(processes in workload()) {
        let report = run(&processes);
        prop_assert_eq!(report.processes.len(), processes.len());

        for p in &report.processes {
            prop_assert_eq!(p.remaining_time(), 0);
            let ct = p.completion_time().unwrap();
            let tat = p.turnaround_time().unwrap();
            let wt = p.waiting_time().unwrap();
            let rt = p.response_time().unwrap();
            prop_assert_eq!(tat, ct - p.arrival_time);
            prop_assert_eq!(wt, tat - p.burst_time);
            prop_assert!(rt <= wt);
        }
    }

    #[test]
    fn timeline_accounts_for_all_work(processes in workload()) {
        let report = run(&processes);

        for pair in report.timeline.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for p in &report.processes {
            let slices: Vec<_> = report.slices_of(&p.label).collect();
            let executed: u64 = slices.iter().map(|s| s.len()).sum();
            prop_assert_eq!(executed, p.burst_time);
            prop_assert_eq!(slices[0].start, p.arrival_time + p.response_time().unwrap());
            prop_assert_eq!(slices[slices.len() - 1].end, p.completion_time().unwrap());
        }

        let stats = &report.stats;
        prop_assert_eq!(stats.busy_time + stats.idle_time, stats.makespan);
        prop_assert_eq!(stats.dispatches as usize, report.timeline.len());
    }

    #[test]
    fn higher_levels_always_win_dispatch(processes in workload()) {
        let report = run(&processes);

        for slice in &report.timeline {
            let blocked_by_higher = waiting_at(&report, slice.start)
                .any(|p| p.queue_level < slice.level);
            prop_assert!(!blocked_by_higher, "{} dispatched over a higher level", slice.label);
        }
    }

    #[test]
    fn sjf_picks_least_remaining_work(processes in workload()) {
        let report = run(&processes);

        for slice in report.timeline.iter().filter(|s| s.level == QueueLevel::Q3) {
            let chosen = report.process(&slice.label).unwrap();
            prop_assert_eq!(slice.len(), chosen.burst_time);

            for other in waiting_at(&report, slice.start)
                .filter(|p| p.queue_level == QueueLevel::Q3 && p.label != chosen.label)
            {
                prop_assert!(chosen.burst_time <= other.burst_time);
                if chosen.burst_time == other.burst_time {
                    prop_assert!(chosen.arrival_time <= other.arrival_time);
                }
            }
        }
    }

    #[test]
    fn simulation_is_idempotent(processes in workload()) {
        let first = run(&processes);
        let second = run(&processes);
        prop_assert_eq!(render_text("out", &first), render_text("out", &second));
        prop_assert_eq!(first.timeline, second.timeline);
    }
}
