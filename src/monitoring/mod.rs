/*!
 * Monitoring Module
 * Structured logging for simulation runs
 */

pub mod tracer;

pub use tracer::{generate_run_id, init_tracing, SimulationSpan};
