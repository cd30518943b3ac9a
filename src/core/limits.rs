/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults and magic numbers used by the scheduler,
 * the input loader and the report writer.
 */

use crate::core::types::Tick;

// =============================================================================
// SCHEDULER
// =============================================================================

/// Number of ready queues in the multilevel scheduler
pub const QUEUE_LEVELS: usize = 3;

/// Default quantum of the first (highest priority) Round-Robin queue
pub const DEFAULT_Q1_QUANTUM: Tick = 1;

/// Default quantum of the second Round-Robin queue
pub const DEFAULT_Q2_QUANTUM: Tick = 3;

/// Largest accepted burst time, arrival time, quantum and total burst (2^53)
///
/// Every clock value stays below `2 * MAX_TIME`, and every metric below
/// that is exactly representable as `f64`.
pub const MAX_TIME: Tick = 1 << 53;

// =============================================================================
// INPUT / OUTPUT
// =============================================================================

/// Field separator of input and output records
pub const FIELD_SEPARATOR: char = ';';

/// Prefix marking a comment line in the input file
pub const COMMENT_PREFIX: char = '#';

/// Number of fields in an input record: label;BT;AT;Q;Pr
pub const INPUT_FIELDS: usize = 5;

/// Column header written to every text report
pub const REPORT_COLUMNS: &str = "# etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT";

/// Input file used when none is configured
pub const DEFAULT_INPUT_PATH: &str = "mlq019.txt";

/// Suffix appended to the input file stem to derive the output file name
pub const OUTPUT_SUFFIX: &str = "_output";
