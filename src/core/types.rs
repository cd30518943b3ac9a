/*!
 * Core Types
 * Common types used across the simulator
 */

use super::errors::MlqError;

/// Logical simulation time, in abstract time units
pub type Tick = u64;

/// Informational process priority (carried to the report, never scheduled on)
pub type Priority = i64;

/// Common result type for simulator operations
pub type MlqResult<T> = Result<T, MlqError>;
