/*!
 * I/O Module
 * Input loading and report rendering around the scheduler
 */

pub mod loader;
pub mod reporter;

pub use loader::{load_processes, parse_processes};
pub use reporter::{format_average, render_json, render_text, write_report};
