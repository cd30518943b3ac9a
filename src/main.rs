/*!
 * MLQ Scheduler - Main Entry Point
 *
 * Usage: mlq [INPUT] [OUTPUT]
 *
 * Loads the process file, runs the multilevel queue simulation and writes
 * the result file. See `Config::from_env` for environment overrides.
 */

use mlq_scheduler::{init_tracing, load_processes, simulate, write_report, Config};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = Config::from_env(std::env::args().skip(1))?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        format = config.format.as_str(),
        "MLQ scheduler starting"
    );

    let processes = load_processes(&config.input)?;
    let report = simulate(processes, config.scheduler)?;
    write_report(&config.output, config.format, &report)?;

    info!(
        processes = report.processes.len(),
        makespan = report.stats.makespan,
        "Simulation complete"
    );
    Ok(())
}
