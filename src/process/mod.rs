/*!
 * Process Module
 * Process records and their scheduling state
 */

pub mod types;

pub use types::{Completion, ProcessRecord, QueueLevel};
